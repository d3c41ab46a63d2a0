use super::engine::scan;
use super::error::TemplateError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An uploaded template and the placeholders derived from it
///
/// `variables` and `issues` are always derived from `raw_html`; the only way
/// to change the HTML is to build a new `Template`.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    title: String,
    act_type: String,
    raw_html: String,
    variables: Vec<String>,
    issues: Vec<TemplateError>,
}

impl Template {
    /// Build a template, deriving its variable set from `raw_html`
    pub fn new(title: impl Into<String>, act_type: impl Into<String>, raw_html: String) -> Self {
        let scanned = scan(&raw_html);
        Self {
            title: title.into(),
            act_type: act_type.into(),
            raw_html,
            variables: scanned.variables,
            issues: scanned.issues,
        }
    }

    /// Human title for an uploaded file name
    ///
    /// `certidao_de_nascimento.docx` → `certidao de nascimento`
    pub fn title_from_file_name(file_name: &str) -> String {
        let stem = file_name.strip_suffix(".docx").unwrap_or(file_name);
        stem.replace('_', " ")
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn act_type(&self) -> &str {
        &self.act_type
    }

    pub fn raw_html(&self) -> &str {
        &self.raw_html
    }

    /// Unique placeholder names in first-occurrence order
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Malformed placeholders; generation is blocked while non-empty
    pub fn issues(&self) -> &[TemplateError] {
        &self.issues
    }

    pub fn is_blocked(&self) -> bool {
        !self.issues.is_empty()
    }

    /// A mapping with an empty entry for every variable
    pub fn empty_mapping(&self) -> ValueMapping {
        ValueMapping::for_variables(&self.variables)
    }
}

/// Placeholder name → current value, in discovery order
///
/// Empty strings are valid entries; they render as the blank sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMapping {
    values: IndexMap<String, String>,
}

impl ValueMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty entry for each variable, preserving order
    pub fn for_variables(variables: &[String]) -> Self {
        Self {
            values: variables
                .iter()
                .map(|name| (name.clone(), String::new()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Set a value; existing keys keep their position, new keys are appended
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Overlay `other` onto this mapping
    pub fn merge(&mut self, other: ValueMapping) {
        self.values.extend(other.values);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for ValueMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_file_name() {
        assert_eq!(
            Template::title_from_file_name("certidao_de_nascimento.docx"),
            "certidao de nascimento"
        );
        assert_eq!(Template::title_from_file_name("modelo.html"), "modelo.html");
    }

    #[test]
    fn test_template_derives_variables() {
        let template = Template::new(
            "t",
            "Documento",
            "<p>{{nome}} nasceu em {{cidade}}, {{nome}}</p>".to_string(),
        );
        assert_eq!(template.variables(), &["nome", "cidade"]);
        assert!(!template.is_blocked());
    }

    #[test]
    fn test_template_with_empty_placeholder_is_blocked() {
        let template = Template::new("t", "Documento", "<p>{{}} {{nome}}</p>".to_string());
        assert!(template.is_blocked());
        assert_eq!(template.variables(), &["nome"]);
    }

    #[test]
    fn test_empty_mapping_has_entry_per_variable() {
        let template = Template::new("t", "Documento", "{{b}}{{a}}".to_string());
        let mapping = template.empty_mapping();
        let entries: Vec<_> = mapping.iter().collect();
        assert_eq!(entries, vec![("b", ""), ("a", "")]);
    }

    #[test]
    fn test_set_keeps_position_and_appends_new_keys() {
        let mut mapping = ValueMapping::for_variables(&["a".to_string(), "b".to_string()]);
        mapping.set("b", "2");
        mapping.set("extra", "x");
        mapping.set("a", "1");
        let keys: Vec<_> = mapping.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "extra"]);
        assert_eq!(mapping.get("a"), Some("1"));
    }

    #[test]
    fn test_merge_overwrites_and_extends() {
        let mut mapping = ValueMapping::for_variables(&["nome".to_string()]);
        let mut other = ValueMapping::new();
        other.set("nome", "Ana");
        other.set("nome_extenso", "ANA");
        mapping.merge(other);
        assert_eq!(mapping.get("nome"), Some("Ana"));
        assert_eq!(mapping.len(), 2);
    }
}
