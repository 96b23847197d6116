//! Markdown rendering of level content and the matching parser.
//!
//! Each level is wrapped in HTML comment markers so the level map survives a
//! trip through plain markdown:
//!
//! ```text
//! <!-- level:2 -->
//! ## Level 2 (informed patient)
//! <!-- summary -->
//! ...
//! <!-- explanation -->
//! ...
//! <!-- key-terms -->
//! - **term**: definition
//!   continued definition line
//! <!-- analogies -->
//! - analogy
//! <!-- examples -->
//! - example
//! <!-- counseling -->
//! - counseling point
//! <!-- clinical-notes -->
//! ...
//! <!-- /level -->
//! ```
//!
//! List sections are only written when non-empty. A list entry that spans
//! several lines continues on lines indented by two spaces.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use crate::error::{Error, Result};
use crate::types::{ComplexityLevel, EducationalContent, KeyTerm};

const LEVEL_OPEN: &str = "<!-- level:";
const LEVEL_CLOSE: &str = "<!-- /level -->";
const SUMMARY: &str = "<!-- summary -->";
const EXPLANATION: &str = "<!-- explanation -->";
const KEY_TERMS: &str = "<!-- key-terms -->";
const ANALOGIES: &str = "<!-- analogies -->";
const EXAMPLES: &str = "<!-- examples -->";
const COUNSELING: &str = "<!-- counseling -->";
const CLINICAL_NOTES: &str = "<!-- clinical-notes -->";
const CONTINUATION: &str = "  ";

/// What `parse_levels` recovers for one level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLevel {
    pub summary: String,
    pub explanation: String,
    pub key_terms: Vec<KeyTerm>,
    pub analogies: Vec<String>,
    pub examples: Vec<String>,
    pub patient_counseling_points: Vec<String>,
    pub clinical_notes: Option<String>,
}

pub fn render_markdown(content: &EducationalContent) -> String {
    let mut out = String::new();
    // fmt::Write for String is infallible.
    write_markdown(&mut out, content).map(|()| out).unwrap_or_default()
}

pub fn write_markdown<W: Write>(out: &mut W, content: &EducationalContent) -> fmt::Result {
    writeln!(out, "# {}", content.name)?;
    if let Some(name_es) = &content.name_es {
        writeln!(out, "_{}_", name_es)?;
    }
    writeln!(out)?;

    for (level, body) in &content.levels {
        writeln!(out, "{}{} -->", LEVEL_OPEN, level)?;
        writeln!(out, "## Level {} ({})", level, level.label())?;
        writeln!(out, "{}\n{}", SUMMARY, body.summary.trim())?;
        writeln!(out, "{}\n{}", EXPLANATION, body.explanation.trim())?;
        if !body.key_terms.is_empty() {
            writeln!(out, "{}", KEY_TERMS)?;
            for term in &body.key_terms {
                write_entry(out, &format!("**{}**: ", term.term), term.definition.trim())?;
            }
        }
        write_list(out, ANALOGIES, &body.analogies)?;
        write_list(out, EXAMPLES, &body.examples)?;
        write_list(out, COUNSELING, &body.patient_counseling_points)?;
        if let Some(notes) = &body.clinical_notes {
            writeln!(out, "{}\n{}", CLINICAL_NOTES, notes.trim())?;
        }
        writeln!(out, "{}\n", LEVEL_CLOSE)?;
    }
    Ok(())
}

fn write_list<W: Write>(out: &mut W, marker: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", marker)?;
    for item in items {
        write_entry(out, "", item.trim())?;
    }
    Ok(())
}

fn write_entry<W: Write>(out: &mut W, prefix: &str, text: &str) -> fmt::Result {
    let mut lines = text.lines();
    writeln!(out, "- {}{}", prefix, lines.next().unwrap_or(""))?;
    for line in lines {
        writeln!(out, "{}{}", CONTINUATION, line)?;
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Section {
    Heading,
    Summary,
    Explanation,
    KeyTerms,
    Analogies,
    Examples,
    Counseling,
    ClinicalNotes,
}

impl Section {
    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            SUMMARY => Some(Self::Summary),
            EXPLANATION => Some(Self::Explanation),
            KEY_TERMS => Some(Self::KeyTerms),
            ANALOGIES => Some(Self::Analogies),
            EXAMPLES => Some(Self::Examples),
            COUNSELING => Some(Self::Counseling),
            CLINICAL_NOTES => Some(Self::ClinicalNotes),
            _ => None,
        }
    }
}

struct OpenLevel {
    level: ComplexityLevel,
    opened_at: usize,
    section: Section,
    summary: Vec<String>,
    explanation: Vec<String>,
    clinical_notes: Option<Vec<String>>,
    key_terms: Vec<KeyTerm>,
    analogies: Vec<String>,
    examples: Vec<String>,
    counseling: Vec<String>,
}

impl OpenLevel {
    fn new(level: ComplexityLevel, opened_at: usize) -> Self {
        Self {
            level,
            opened_at,
            section: Section::Heading,
            summary: Vec::new(),
            explanation: Vec::new(),
            clinical_notes: None,
            key_terms: Vec::new(),
            analogies: Vec::new(),
            examples: Vec::new(),
            counseling: Vec::new(),
        }
    }

    fn items_mut(&mut self) -> Option<&mut Vec<String>> {
        match self.section {
            Section::Analogies => Some(&mut self.analogies),
            Section::Examples => Some(&mut self.examples),
            Section::Counseling => Some(&mut self.counseling),
            _ => None,
        }
    }

    fn push_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        let trimmed = line.trim();
        match self.section {
            Section::Heading => {}
            Section::Summary => self.summary.push(line.to_string()),
            Section::Explanation => self.explanation.push(line.to_string()),
            Section::ClinicalNotes => self.clinical_notes.get_or_insert_with(Vec::new).push(line.to_string()),
            Section::KeyTerms => {
                if let Some(rest) = line.strip_prefix(CONTINUATION) {
                    let last = self.key_terms.last_mut().ok_or_else(|| stray_continuation(line, line_no))?;
                    last.definition.push('\n');
                    last.definition.push_str(rest);
                } else if !trimmed.is_empty() {
                    self.key_terms.push(parse_key_term(trimmed, line_no)?);
                }
            }
            Section::Analogies | Section::Examples | Section::Counseling => {
                let Some(items) = self.items_mut() else { return Ok(()) };
                if let Some(rest) = line.strip_prefix(CONTINUATION) {
                    let last = items.last_mut().ok_or_else(|| stray_continuation(line, line_no))?;
                    last.push('\n');
                    last.push_str(rest);
                } else if !trimmed.is_empty() {
                    let item = trimmed.strip_prefix('-').ok_or_else(|| Error::Parse {
                        line: line_no,
                        message: format!("malformed list item '{}'", trimmed),
                    })?;
                    items.push(item.trim().to_string());
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> RenderedLevel {
        let tidy = |items: Vec<String>| -> Vec<String> { items.into_iter().map(|s| s.trim_end().to_string()).collect() };
        RenderedLevel {
            summary: self.summary.join("\n").trim().to_string(),
            explanation: self.explanation.join("\n").trim().to_string(),
            key_terms: self
                .key_terms
                .into_iter()
                .map(|t| KeyTerm { definition: t.definition.trim_end().to_string(), term: t.term })
                .collect(),
            analogies: tidy(self.analogies),
            examples: tidy(self.examples),
            patient_counseling_points: tidy(self.counseling),
            clinical_notes: self.clinical_notes.map(|lines| lines.join("\n").trim().to_string()),
        }
    }
}

/// Recovers the level map from text produced by [`render_markdown`].
///
/// Text outside level markers is ignored. A level number outside 1-5, a
/// repeated level, a nested or unterminated block, a malformed list line or a
/// continuation line with nothing to continue is an error.
pub fn parse_levels(text: &str) -> Result<BTreeMap<ComplexityLevel, RenderedLevel>> {
    let mut levels = BTreeMap::new();
    let mut current: Option<OpenLevel> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix(LEVEL_OPEN) {
            if let Some(open) = &current {
                return Err(Error::Parse {
                    line: line_no,
                    message: format!("level {} opened at line {} is not closed", open.level, open.opened_at),
                });
            }
            let number = rest.trim_end_matches("-->").trim();
            let raw: u8 = number.parse().map_err(|_| Error::Parse {
                line: line_no,
                message: format!("invalid level marker '{}'", trimmed),
            })?;
            let level = ComplexityLevel::try_from(raw)?;
            if levels.contains_key(&level) {
                return Err(Error::Parse { line: line_no, message: format!("level {} appears twice", level) });
            }
            current = Some(OpenLevel::new(level, line_no));
            continue;
        }

        let Some(open) = current.as_mut() else { continue };
        if trimmed == LEVEL_CLOSE {
            if let Some(done) = current.take() {
                levels.insert(done.level, done.finish());
            }
        } else if let Some(section) = Section::from_marker(trimmed) {
            open.section = section;
        } else {
            open.push_line(line, line_no)?;
        }
    }

    if let Some(open) = current {
        return Err(Error::Parse {
            line: open.opened_at,
            message: format!("level {} is never closed", open.level),
        });
    }
    Ok(levels)
}

fn parse_key_term(line: &str, line_no: usize) -> Result<KeyTerm> {
    let malformed = || Error::Parse { line: line_no, message: format!("malformed key term '{}'", line) };
    let rest = line.strip_prefix("- **").ok_or_else(malformed)?;
    let (term, definition) = rest.split_once("**:").ok_or_else(malformed)?;
    Ok(KeyTerm { term: term.to_string(), definition: definition.trim().to_string() })
}

fn stray_continuation(line: &str, line_no: usize) -> Error {
    Error::Parse { line: line_no, message: format!("continuation line with no entry before it '{}'", line.trim()) }
}
