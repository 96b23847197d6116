//! Structural and editorial checks over content records.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::registry::Registry;
use crate::types::{ComplexityLevel, EducationalContent, LegacyEducationalContent, LevelContent};

// Markers match in capitals only: Spanish prose uses "todo" as an ordinary word.
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(TODO|FIXME)\b|(?i:\bplaceholder\b)").expect("placeholder pattern compiles"));

// ICD-11 stem codes: 3-4 characters with an optional dotted extension, e.g. JA24 or 5A80.1.
static ICD11_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Z]{2}[0-9A-Z]{1,2}(\.[0-9A-Z]{1,3})?$").expect("ICD-11 pattern compiles"));

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    Interface,
    LevelContent,
    Quality,
    CrossReference,
    Metadata,
    Quiz,
    Registry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub content_id: String,
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "[{}] {} ({:?}): {}", tag, self.content_id, self.category, self.message)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.issues.extend(other.issues);
    }

    fn push(&mut self, content_id: &str, severity: Severity, category: IssueCategory, message: String) {
        self.issues.push(ValidationIssue { content_id: content_id.to_string(), severity, category, message });
    }
}

pub fn is_valid_icd11(code: &str) -> bool {
    ICD11_RE.is_match(code)
}

fn has_placeholder(text: &str) -> bool {
    PLACEHOLDER_RE.is_match(text)
}

// U+2500..U+257F
fn has_box_drawing(text: &str) -> bool {
    text.chars().any(|c| ('\u{2500}'..='\u{257F}').contains(&c))
}

/// Validates one record. Cross-references are checked against `known_ids`
/// when given.
pub fn validate_content(content: &EducationalContent, known_ids: Option<&HashSet<String>>) -> ValidationReport {
    let mut report = ValidationReport::default();
    let id = content.id.as_str();

    if content.id.trim().is_empty() {
        report.push(id, Severity::Error, IssueCategory::Interface, "Missing required field: id".to_string());
    }
    if content.name.trim().is_empty() {
        report.push(id, Severity::Error, IssueCategory::Interface, "Missing required field: name".to_string());
    }

    for level in ComplexityLevel::ALL {
        match content.levels.get(&level) {
            None => report.push(id, Severity::Error, IssueCategory::Interface, format!("Missing complexity level {}", level)),
            Some(body) => validate_level(&mut report, id, level, body),
        }
    }

    if has_placeholder(&content.name) {
        report.push(id, Severity::Error, IssueCategory::Quality, format!("Name contains placeholder text: {}", content.name));
    }
    match &content.name_es {
        None => report.push(id, Severity::Warning, IssueCategory::Quality, "Missing Spanish translation (nameEs)".to_string()),
        Some(name_es) if has_placeholder(name_es) => report.push(
            id,
            Severity::Error,
            IssueCategory::Quality,
            format!("Spanish name contains placeholder text: {}", name_es),
        ),
        Some(_) => {}
    }

    for (i, xref) in content.cross_references.iter().enumerate() {
        if xref.target_id.trim().is_empty() {
            report.push(id, Severity::Error, IssueCategory::CrossReference, format!("Cross-reference {}: Missing targetId", i + 1));
            continue;
        }
        if xref.target_id == content.id {
            report.push(id, Severity::Warning, IssueCategory::CrossReference, format!("Cross-reference {}: points at itself", i + 1));
        }
        if let Some(known) = known_ids {
            if !known.contains(&xref.target_id) {
                report.push(
                    id,
                    Severity::Warning,
                    IssueCategory::CrossReference,
                    format!("Cross-reference to non-existent ID: {}", xref.target_id),
                );
            }
        }
    }

    validate_metadata(&mut report, content);
    report
}

fn validate_level(report: &mut ValidationReport, id: &str, level: ComplexityLevel, body: &LevelContent) {
    if body.level != level {
        report.push(
            id,
            Severity::Error,
            IssueCategory::Interface,
            format!("Level {}: record declares level {}", level, body.level),
        );
    }
    if body.summary.trim().is_empty() {
        report.push(id, Severity::Error, IssueCategory::LevelContent, format!("Level {}: Missing or empty summary", level));
    }
    if body.explanation.trim().is_empty() {
        report.push(id, Severity::Error, IssueCategory::LevelContent, format!("Level {}: Missing or empty explanation", level));
    }
    if body.key_terms.is_empty() {
        report.push(id, Severity::Warning, IssueCategory::LevelContent, format!("Level {}: Missing keyTerms array", level));
    }
    for (i, term) in body.key_terms.iter().enumerate() {
        if term.term.trim().is_empty() {
            report.push(id, Severity::Error, IssueCategory::LevelContent, format!("Level {}: Key term {} has empty term", level, i + 1));
        } else if term.definition.trim().is_empty() {
            report.push(
                id,
                Severity::Error,
                IssueCategory::LevelContent,
                format!("Level {}: Key term \"{}\" has empty definition", level, term.term),
            );
        }
        if has_placeholder(&term.term) || has_placeholder(&term.definition) {
            report.push(
                id,
                Severity::Error,
                IssueCategory::Quality,
                format!("Level {}: Key term \"{}\" contains placeholder text", level, term.term),
            );
        }
    }
    for (field, text) in [("summary", &body.summary), ("explanation", &body.explanation)] {
        if has_placeholder(text) {
            report.push(id, Severity::Error, IssueCategory::Quality, format!("Level {}: {} contains placeholder text", level, field));
        }
    }
    if has_box_drawing(&body.explanation) {
        report.push(
            id,
            Severity::Warning,
            IssueCategory::Quality,
            format!("Level {}: explanation contains box-drawing characters; use ASCII equivalents", level),
        );
    }
}

fn validate_metadata(report: &mut ValidationReport, content: &EducationalContent) {
    let id = content.id.as_str();
    if content.version == 0 {
        report.push(id, Severity::Error, IssueCategory::Metadata, "Invalid version: 0. Must be a positive number.".to_string());
    }
    let created = parse_date(report, id, "createdAt", &content.created_at);
    let updated = parse_date(report, id, "updatedAt", &content.updated_at);
    if let (Some(created), Some(updated)) = (created, updated) {
        if updated < created {
            report.push(
                id,
                Severity::Warning,
                IssueCategory::Metadata,
                format!("updatedAt {} is before createdAt {}", content.updated_at, content.created_at),
            );
        }
    }
}

fn parse_date(report: &mut ValidationReport, id: &str, field: &str, value: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        report.push(id, Severity::Error, IssueCategory::Metadata, format!("Missing {} field", field));
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            report.push(id, Severity::Error, IssueCategory::Metadata, format!("Invalid {} format: {}", field, value));
            None
        }
    }
}

/// Validates every record, using the registry's own ids to resolve cross-references.
pub fn validate_registry(registry: &Registry<EducationalContent>) -> ValidationReport {
    let known: HashSet<String> = registry.ids().map(str::to_string).collect();
    let mut report = ValidationReport::default();
    for content in registry.iter() {
        report.merge(validate_content(content, Some(&known)));
    }
    report
}

/// Reports ids that occur more than once in a list that has not yet been
/// put into a registry.
pub fn find_duplicate_ids(contents: &[EducationalContent]) -> ValidationReport {
    let mut seen = HashSet::new();
    let mut report = ValidationReport::default();
    for content in contents {
        if !seen.insert(content.id.as_str()) {
            report.push(&content.id, Severity::Error, IssueCategory::Registry, format!("Duplicate content id: {}", content.id));
        }
    }
    report
}

pub fn validate_legacy(content: &LegacyEducationalContent) -> ValidationReport {
    let mut report = ValidationReport::default();
    let id = content.id.as_str();
    if content.title.trim().is_empty() {
        report.push(id, Severity::Error, IssueCategory::Interface, "Missing required field: title".to_string());
    }
    for (level, body) in &content.levels {
        if body.content.trim().is_empty() {
            report.push(id, Severity::Error, IssueCategory::LevelContent, format!("Level {}: Missing or empty content", level));
        }
        for question in &body.quiz {
            if question.options.len() < 2 {
                report.push(
                    id,
                    Severity::Error,
                    IssueCategory::Quiz,
                    format!("Level {}: question {} needs at least two options", level, question.id),
                );
            }
            if question.correct_answer >= question.options.len() {
                report.push(
                    id,
                    Severity::Error,
                    IssueCategory::Quiz,
                    format!(
                        "Level {}: question {} answer index {} is out of range",
                        level, question.id, question.correct_answer
                    ),
                );
            }
        }
    }
    report
}
