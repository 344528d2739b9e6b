use serde_json::Map;
use serde_json::Value;

/// Convert a snake_case key to camelCase.
///
/// The first word is kept as is; every following word is title-cased.
pub fn camelize(key: &str) -> String {
    let mut words = key.split('_');
    let mut camelized = words.next().unwrap_or_default().to_string();

    for word in words {
        camelized.push_str(&title_case(word));
    }

    camelized
}

/// Rename every key of a flat object, keeping values and key order.
///
/// When two keys camelize to the same name the value of the later one wins.
pub fn camelize_keys(data: Map<String, Value>) -> Map<String, Value> {
    data.into_iter()
        .map(|(key, value)| (camelize(&key), value))
        .collect()
}

// Upper-case the first cased character of every run of cased characters
// and lower-case the rest
fn title_case(word: &str) -> String {
    let mut titled = String::with_capacity(word.len());
    let mut previous_cased = false;

    for c in word.chars() {
        if previous_cased {
            titled.extend(c.to_lowercase());
        } else {
            titled.extend(c.to_uppercase());
        }
        previous_cased = c.is_lowercase() || c.is_uppercase();
    }

    titled
}
