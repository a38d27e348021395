//! Prompt templates module.
//!
//! Templates use `{{name}}` placeholders. Rendering is a single left-to-right
//! pass: substituted values are copied through and never scanned again, so an
//! argument containing `{{...}}` comes out literally.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Render the template with the given arguments.
    ///
    /// Placeholders naming a declared argument that was not supplied render
    /// as empty text. Any other placeholder is left as written.
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        render(&self.template, |key| {
            arguments.get(key).map(String::as_str).or_else(|| {
                self.arguments
                    .iter()
                    .any(|arg| arg.name == key)
                    .then_some("")
            })
        })
    }
}

/// Substitute every `{{key}}` for which `lookup` returns a value.
pub fn render<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];

        let Some(close) = after.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = after[..close].trim();
        match lookup(key) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after[close + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(text: &str, args: &[(&str, bool)]) -> PromptTemplate {
        PromptTemplate {
            name: "test".to_string(),
            description: None,
            arguments: args
                .iter()
                .map(|(name, required)| PromptArgument {
                    name: name.to_string(),
                    title: None,
                    description: None,
                    required: Some(*required),
                })
                .collect(),
            template: text.to_string(),
        }
    }

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let t = template("Hello, {{name}}!", &[("name", true)]);
        assert_eq!(t.render(&args(&[("name", "World")])), "Hello, World!");
    }

    #[test]
    fn test_values_are_not_re_expanded() {
        let t = template("{{a}} and {{b}}", &[("a", true), ("b", true)]);
        let rendered = t.render(&args(&[("a", "{{b}}"), ("b", "x")]));
        assert_eq!(rendered, "{{b}} and x");
    }

    #[test]
    fn test_missing_optional_renders_empty() {
        let t = template("```{{language}}\n", &[("language", false)]);
        assert_eq!(t.render(&HashMap::new()), "```\n");
    }

    #[test]
    fn test_unknown_and_unclosed_placeholders_kept() {
        let t = template("{{other}} {{ name }} {{open", &[("name", true)]);
        assert_eq!(t.render(&args(&[("name", "n")])), "{{other}} n {{open");
    }
}
