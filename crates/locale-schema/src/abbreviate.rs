use serde_json::Value;
use std::borrow::Cow;

/// Short label for a value: the upper-cased initial of every word.
///
/// Words are runs of alphanumeric characters. Numbers use their decimal
/// rendering. Anything else, or text without a word, has no abbreviation.
///
/// ```
/// use locale_schema::abbreviate::abbreviate;
/// use serde_json::json;
///
/// assert_eq!(abbreviate(&json!("Tomato")).as_deref(), Some("T"));
/// assert_eq!(abbreviate(&json!("Ministry of Finance")).as_deref(), Some("MOF"));
/// assert_eq!(abbreviate(&json!(null)), None);
/// ```
pub fn abbreviate(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Number(number) => Cow::Owned(number.to_string()),
        _ => return None,
    };

    let abbreviation: String = text
        .split(|c: char| !c.is_alphanumeric())
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    (!abbreviation.is_empty()).then_some(abbreviation)
}
