use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::consts::DISCLAIMER;

pub const SCENARIO_PLACEHOLDER: &str = "[scenarios]";
pub const CONSTRAINTS_PLACEHOLDER: &str = "[constraints]";

const INTRO: &str = "You are an experienced project advisor. Analyse the scenario below, taking every constraint into account.";
const RESPONSE_HEADER: &str = "Respond with a single JSON object with exactly these keys:";
const FIELDS: &[(&str, &str)] = &[
    ("summary", "a short summary of the scenario (string)"),
    ("pitfalls_or_risks", "potential pitfalls or risks (array of strings)"),
    ("proposed_strategies", "strategies to address them (array of strings)"),
    ("recommended_resources", "tools, references or people that would help (array of strings)"),
    ("disclaimer", "the disclaimer given below, verbatim (string)"),
];
const RULES_HEADER: &str = "Rules:";
const RULES: &[&str] = &[
    "Output JSON only. No markdown, no extra text, no extra keys.",
    "Every constraint must be reflected in the strategies.",
    "Keep each list item to one sentence.",
];

fn build_default_template() -> String {
    let fields = FIELDS
        .iter()
        .map(|(key, meaning)| format!("- \"{}\": {}", key, meaning))
        .collect::<Vec<_>>()
        .join("\n");

    let rules = RULES
        .iter()
        .map(|rule| format!("- {}", rule))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{intro}\n\nScenario: {scenario}\nConstraints: {constraints}\n\n{response_header}\n{fields}\n\nDisclaimer: {disclaimer}\n\n{rules_header}\n{rules}\n",
        intro = INTRO,
        scenario = SCENARIO_PLACEHOLDER,
        constraints = CONSTRAINTS_PLACEHOLDER,
        response_header = RESPONSE_HEADER,
        fields = fields,
        disclaimer = DISCLAIMER,
        rules_header = RULES_HEADER,
        rules = rules
    )
}

/// Instruction text with `[scenarios]` and `[constraints]` slots.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    /// Wrap a custom template. Both placeholders must appear.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        for placeholder in [SCENARIO_PLACEHOLDER, CONSTRAINTS_PLACEHOLDER] {
            if !text.contains(placeholder) {
                bail!("prompt template is missing the {} placeholder", placeholder);
            }
        }
        Ok(Self { text })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read prompt template {}", path.display()))?;
        Self::new(text).with_context(|| format!("invalid prompt template {}", path.display()))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Fill in the scenario and the comma-joined constraints.
    ///
    /// Single pass over the template: placeholder text inside the caller's
    /// input is left alone.
    pub fn render(&self, scenario: &str, constraints: &[String]) -> String {
        let constraints = constraints.join(", ");
        let mut out = String::with_capacity(self.text.len() + scenario.len() + constraints.len());
        let mut rest = self.text.as_str();

        while let Some((pos, placeholder, value)) = next_placeholder(rest, scenario, &constraints) {
            out.push_str(&rest[..pos]);
            out.push_str(value);
            rest = &rest[pos + placeholder.len()..];
        }
        out.push_str(rest);
        out
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            text: build_default_template(),
        }
    }
}

/// Earliest placeholder in `text`, with the value that replaces it.
fn next_placeholder<'a>(
    text: &str,
    scenario: &'a str,
    constraints: &'a str,
) -> Option<(usize, &'static str, &'a str)> {
    [
        (SCENARIO_PLACEHOLDER, scenario),
        (CONSTRAINTS_PLACEHOLDER, constraints),
    ]
    .into_iter()
    .filter_map(|(placeholder, value)| text.find(placeholder).map(|pos| (pos, placeholder, value)))
    .min_by_key(|(pos, _, _)| *pos)
}
