//! Stateless frontmatter lint rules for skill documents.
//!
//! A skill document opens with a `---`-fenced block of `key: value` pairs.
//! The rules here check naming and voice conventions; they never touch the
//! filesystem, so `prsafe lint` stays a thin wrapper around [`lint_document`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Fields allowed in skill frontmatter.
const VALID_FIELDS: [&str; 11] = [
    "name",
    "description",
    "argument-hint",
    "disable-model-invocation",
    "user-invocable",
    "model",
    "context",
    "agent",
    "hooks",
    "version",
    "allowed-tools",
];

/// Skill names that read as actions without ending in `-ing`.
const GERUND_EXCEPTIONS: [&str; 6] = ["review", "commit", "deploy", "test", "build", "setup"];

/// Phrases a description should contain so readers know when to reach for
/// the skill.
const TRIGGER_INDICATORS: [&str; 8] = [
    "trigger",
    "invoke",
    "use when",
    "use this skill when",
    "handles",
    "applies to",
    "for",
    "includes",
];

static FIRST_OR_SECOND_PERSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(i|we|you|my|our|your)\b").expect("valid person regex"));

/// Finding severity: errors fail the lint run, warnings do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One rule violation with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Extract simple `key: value` frontmatter between `---` fences.
///
/// Indented lines continue the previous key's value. Returns `None` when the
/// opening or closing fence is missing.
pub fn extract_frontmatter(content: &str) -> Option<BTreeMap<String, String>> {
    let mut lines = content.lines();
    if lines.next()?.trim() != "---" {
        return None;
    }

    let mut fields = BTreeMap::new();
    let mut current_key: Option<String> = None;
    for line in lines {
        if line.trim() == "---" {
            return Some(fields);
        }
        if let Some((key, value)) = line.split_once(':')
            && !line.starts_with(' ')
        {
            let key = key.trim().to_string();
            fields.insert(key.clone(), value.trim().to_string());
            current_key = Some(key);
        } else if line.starts_with(' ')
            && let Some(key) = &current_key
            && let Some(existing) = fields.get_mut(key)
        {
            existing.push(' ');
            existing.push_str(line.trim());
        }
    }

    // Opening fence was never closed.
    None
}

/// Run all lint rules over a document.
pub fn lint_document(content: &str) -> Vec<Finding> {
    let Some(fields) = extract_frontmatter(content) else {
        return vec![Finding::error("no valid frontmatter found")];
    };

    let mut findings = Vec::new();
    check_name(&fields, &mut findings);
    check_description(&fields, &mut findings);
    for field in fields.keys() {
        if !VALID_FIELDS.contains(&field.as_str()) {
            findings.push(Finding::warning(format!(
                "unknown field '{field}' in frontmatter"
            )));
        }
    }
    findings
}

fn check_name(fields: &BTreeMap<String, String>, findings: &mut Vec<Finding>) {
    let Some(name) = fields.get("name").filter(|name| !name.is_empty()) else {
        findings.push(Finding::error("'name' field is required"));
        return;
    };
    if name.len() > 64 {
        findings.push(Finding::error(format!(
            "name '{name}' exceeds 64 characters ({} chars)",
            name.len()
        )));
    }
    if !is_gerund(name) {
        findings.push(Finding::warning(format!(
            "name '{name}' should use gerund form (verb + -ing)"
        )));
    }
}

fn check_description(fields: &BTreeMap<String, String>, findings: &mut Vec<Finding>) {
    let Some(description) = fields.get("description").filter(|d| !d.is_empty()) else {
        findings.push(Finding::error("'description' field is required"));
        return;
    };
    if description.len() > 1024 {
        findings.push(Finding::error(format!(
            "description exceeds 1024 characters ({} chars)",
            description.len()
        )));
    }
    if !is_third_person(description) {
        findings.push(Finding::warning(
            "description should use third person (avoid 'I', 'we', 'you')",
        ));
    }
    if !description.to_lowercase().starts_with("use this skill") {
        findings.push(Finding::warning(
            "description should start with 'Use this skill when...'",
        ));
    }
    if !has_trigger_keywords(description) {
        findings.push(Finding::warning(
            "description should include trigger keywords (e.g. 'use when', 'invoke when')",
        ));
    }
    for issue in grammar_issues(description) {
        findings.push(Finding::warning(issue));
    }
}

fn is_gerund(name: &str) -> bool {
    name.split('-')
        .any(|part| part.ends_with("ing") || GERUND_EXCEPTIONS.contains(&part))
}

/// Checks only the first five words: voice is set by the opening of the
/// sentence, and later words ("you" in a quoted example, say) are noise.
fn is_third_person(text: &str) -> bool {
    let head = text.split_whitespace().take(5).collect::<Vec<_>>().join(" ");
    !FIRST_OR_SECOND_PERSON.is_match(&head)
}

fn has_trigger_keywords(text: &str) -> bool {
    let lower = text.to_lowercase();
    TRIGGER_INDICATORS
        .iter()
        .any(|indicator| lower.contains(indicator))
}

fn grammar_issues(text: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if text.chars().next().is_some_and(char::is_lowercase) {
        issues.push("description should start with a capital letter".to_string());
    }
    if !text.trim_end().ends_with('.') {
        issues.push("description should end with a period".to_string());
    }

    let sentences: Vec<&str> = text.split('.').collect();
    for sentence in &sentences[..sentences.len().saturating_sub(1)] {
        let sentence = sentence.trim();
        if let Some(first) = sentence.chars().next()
            && first.is_lowercase()
        {
            let head: String = sentence.chars().take(50).collect();
            issues.push(format!(
                "sentence should start with a capital letter: '{head}...'"
            ));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN_DOC: &str = "---\nname: caching-results\ndescription: Use this skill when caching expensive results. Triggers include slow builds.\n---\n\nBody text.\n";

    fn messages(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn clean_document_has_no_findings() {
        assert_eq!(lint_document(CLEAN_DOC), Vec::new());
    }

    #[test]
    fn missing_fences_is_an_error() {
        let findings = lint_document("name: caching-results\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(findings[0].message.contains("frontmatter"));
    }

    #[test]
    fn unclosed_fence_is_an_error() {
        let findings = lint_document("---\nname: caching-results\n");
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn extract_handles_continuation_lines() {
        let doc = "---\ndescription: Use this skill when\n  things need caching.\n---\n";
        let fields = extract_frontmatter(doc).expect("frontmatter");
        assert_eq!(
            fields.get("description").map(String::as_str),
            Some("Use this skill when things need caching.")
        );
    }

    #[test]
    fn missing_name_and_description_are_errors() {
        let findings = lint_document("---\nmodel: opus\n---\n");
        let errors: Vec<&Finding> = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 2);
        assert!(messages(&findings).contains(&"'name' field is required"));
        assert!(messages(&findings).contains(&"'description' field is required"));
    }

    #[test]
    fn non_gerund_name_warns() {
        let doc = "---\nname: cache\ndescription: Use this skill when caching results.\n---\n";
        let findings = lint_document(doc);
        assert!(
            findings
                .iter()
                .any(|f| f.severity == Severity::Warning && f.message.contains("gerund"))
        );
    }

    #[test]
    fn gerund_exceptions_are_accepted() {
        assert!(is_gerund("code-review"));
        assert!(is_gerund("converting-commands"));
        assert!(!is_gerund("cache"));
    }

    #[test]
    fn second_person_opening_warns() {
        let doc = "---\nname: caching-results\ndescription: You should use this skill when caching results.\n---\n";
        let findings = lint_document(doc);
        assert!(
            findings
                .iter()
                .any(|f| f.message.contains("third person"))
        );
    }

    #[test]
    fn unknown_field_warns() {
        let doc = "---\nname: caching-results\ndescription: Use this skill when caching expensive results.\nbanana: yes\n---\n";
        let findings = lint_document(doc);
        assert!(
            findings
                .iter()
                .any(|f| f.severity == Severity::Warning && f.message.contains("'banana'"))
        );
    }

    #[test]
    fn overlong_name_is_an_error() {
        let name = "x".repeat(70);
        let doc =
            format!("---\nname: {name}\ndescription: Use this skill when testing limits.\n---\n");
        let findings = lint_document(&doc);
        assert!(
            findings
                .iter()
                .any(|f| f.severity == Severity::Error && f.message.contains("64"))
        );
    }

    #[test]
    fn grammar_rules_flag_casing_and_period() {
        let doc = "---\nname: caching-results\ndescription: use this skill when caching. it helps\n---\n";
        let findings = lint_document(doc);
        let msgs = messages(&findings);
        assert!(msgs.iter().any(|m| m.contains("capital letter")));
        assert!(msgs.iter().any(|m| m.contains("end with a period")));
    }
}
