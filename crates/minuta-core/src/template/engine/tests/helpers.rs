//! Shared helpers for template engine tests

use crate::config::SubstitutionConfig;
use crate::template::model::ValueMapping;

/// Default substitution style (bold span, `__________` sentinel)
pub fn default_style() -> SubstitutionConfig {
    SubstitutionConfig::default()
}

/// Build a mapping from `(name, value)` pairs
pub fn mapping(pairs: &[(&str, &str)]) -> ValueMapping {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The wrapper produced for `value` with the default style
pub fn bold(value: &str) -> String {
    format!("<span style=\"font-weight: bold;\">{}</span>", value)
}
