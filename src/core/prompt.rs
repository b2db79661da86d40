use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"))
}

/// A prompt with `{{name}}` substitution points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    name: &'static str,
    text: &'static str,
}

impl PromptTemplate {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    /// 模板中出現的佔位符名稱（去重，依首次出現順序）
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for caps in placeholder_regex().captures_iter(self.text) {
            if let Some(m) = caps.get(1) {
                let name = m.as_str();
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Replaces every occurrence of each known placeholder in one pass.
    ///
    /// Substituted values are never rescanned, so fixture text containing
    /// braces is inserted verbatim. Placeholders without a value stay in the
    /// output as-is and are logged.
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let lookup: HashMap<&str, &str> = values.iter().copied().collect();
        let mut missing: Vec<String> = Vec::new();

        let rendered = placeholder_regex().replace_all(self.text, |caps: &Captures| {
            let key = &caps[1];
            match lookup.get(key) {
                Some(value) => (*value).to_string(),
                None => {
                    if !missing.iter().any(|m| m == key) {
                        missing.push(key.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });

        if !missing.is_empty() {
            tracing::warn!(
                "⚠️ Prompt '{}' sent with unresolved placeholders: {:?}",
                self.name,
                missing
            );
        }

        rendered.into_owned()
    }
}
