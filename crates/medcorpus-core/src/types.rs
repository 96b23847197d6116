//! Domain types for the educational content corpus.
//!
//! Field names serialize in camelCase so content packs written for the
//! presentation layer load without translation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::Error;

pub type ContentId = String;

/// Audience sophistication of a level, lay patient (1) through clinical expert (5).
///
/// Serialized as a bare integer; any value outside 1-5 is rejected on load,
/// which keeps level maps restricted to the five known keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ComplexityLevel {
    Lay = 1,
    Informed = 2,
    Student = 3,
    Clinician = 4,
    Expert = 5,
}

impl ComplexityLevel {
    pub const ALL: [ComplexityLevel; 5] = [
        ComplexityLevel::Lay,
        ComplexityLevel::Informed,
        ComplexityLevel::Student,
        ComplexityLevel::Clinician,
        ComplexityLevel::Expert,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplexityLevel::Lay => "lay patient",
            ComplexityLevel::Informed => "informed patient",
            ComplexityLevel::Student => "health sciences student",
            ComplexityLevel::Clinician => "clinician",
            ComplexityLevel::Expert => "clinical expert",
        }
    }
}

impl TryFrom<u8> for ComplexityLevel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ComplexityLevel::Lay),
            2 => Ok(ComplexityLevel::Informed),
            3 => Ok(ComplexityLevel::Student),
            4 => Ok(ComplexityLevel::Clinician),
            5 => Ok(ComplexityLevel::Expert),
            other => Err(Error::InvalidLevel(other)),
        }
    }
}

impl From<ComplexityLevel> for u8 {
    fn from(level: ComplexityLevel) -> Self {
        level.as_u8()
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Structure,
    System,
    Pathway,
    Process,
    Condition,
    Concept,
    Topic,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Structure => "structure",
            ContentType::System => "system",
            ContentType::Pathway => "pathway",
            ContentType::Process => "process",
            ContentType::Condition => "condition",
            ContentType::Concept => "concept",
            ContentType::Topic => "topic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentStatus {
    Draft,
    Review,
    Published,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClinicalRelevance {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
    Related,
    SeeAlso,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaType {
    Diagram,
    Illustration,
    Photo,
    Animation,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CitationType {
    Textbook,
    Article,
    Guideline,
    Website,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
}

/// The material for one audience level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelContent {
    pub level: ComplexityLevel,
    pub summary: String,
    pub explanation: String,
    #[serde(default)]
    pub key_terms: Vec<KeyTerm>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analogies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patient_counseling_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,
}

impl LevelContent {
    pub fn new(level: ComplexityLevel, summary: &str, explanation: &str) -> Self {
        Self {
            level,
            summary: summary.to_string(),
            explanation: explanation.trim().to_string(),
            key_terms: Vec::new(),
            analogies: Vec::new(),
            examples: Vec::new(),
            patient_counseling_points: Vec::new(),
            clinical_notes: None,
        }
    }

    pub fn with_key_terms(mut self, terms: &[(&str, &str)]) -> Self {
        self.key_terms.extend(terms.iter().map(|(term, definition)| KeyTerm {
            term: term.to_string(),
            definition: definition.to_string(),
        }));
        self
    }

    pub fn with_analogies(mut self, items: &[&str]) -> Self {
        self.analogies.extend(items.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_examples(mut self, items: &[&str]) -> Self {
        self.examples.extend(items.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_counseling(mut self, items: &[&str]) -> Self {
        self.patient_counseling_points.extend(items.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_clinical_notes(mut self, notes: &str) -> Self {
        self.clinical_notes = Some(notes.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRef {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub filename: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub id: String,
    #[serde(rename = "type")]
    pub citation_type: CitationType,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl Citation {
    pub fn new(id: &str, citation_type: CitationType, title: &str, authors: &[&str], source: &str) -> Self {
        Self {
            id: id.to_string(),
            citation_type,
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            source: source.to_string(),
            year: None,
            url: None,
            license: None,
        }
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    pub target_id: ContentId,
    pub target_type: ContentType,
    pub relationship: Relationship,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRelevance {
    pub usmle: bool,
    pub nbme: bool,
    #[serde(default)]
    pub shelf: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTags {
    #[serde(default)]
    pub systems: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub clinical_relevance: ClinicalRelevance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_relevance: Option<ExamRelevance>,
}

impl ContentTags {
    pub fn new(systems: &[&str], topics: &[&str], keywords: &[&str], clinical_relevance: ClinicalRelevance) -> Self {
        Self {
            systems: systems.iter().map(|s| s.to_string()).collect(),
            topics: topics.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            clinical_relevance,
            exam_relevance: None,
        }
    }

    pub fn exam(mut self, usmle: bool, nbme: bool, shelf: &[&str]) -> Self {
        self.exam_relevance = Some(ExamRelevance {
            usmle,
            nbme,
            shelf: shelf.iter().map(|s| s.to_string()).collect(),
        });
        self
    }
}

/// One medical topic explained across up to five audience levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalContent {
    pub id: ContentId,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_es: Option<String>,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub levels: BTreeMap<ComplexityLevel, LevelContent>,
    #[serde(default)]
    pub media: Vec<MediaRef>,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub cross_references: Vec<CrossReference>,
    pub tags: ContentTags,
    pub created_at: String,
    pub updated_at: String,
    pub version: u32,
    pub status: ContentStatus,
    #[serde(default)]
    pub contributors: Vec<String>,
}

impl EducationalContent {
    pub fn new(id: &str, content_type: ContentType, name: &str, tags: ContentTags) -> Self {
        Self {
            id: id.to_string(),
            content_type,
            name: name.to_string(),
            name_es: None,
            alternate_names: Vec::new(),
            levels: BTreeMap::new(),
            media: Vec::new(),
            citations: Vec::new(),
            cross_references: Vec::new(),
            tags,
            created_at: String::new(),
            updated_at: String::new(),
            version: 1,
            status: ContentStatus::Draft,
            contributors: Vec::new(),
        }
    }

    pub fn with_name_es(mut self, name_es: &str) -> Self {
        self.name_es = Some(name_es.to_string());
        self
    }

    pub fn with_alternate_names(mut self, names: &[&str]) -> Self {
        self.alternate_names.extend(names.iter().map(|s| s.to_string()));
        self
    }

    /// Adds a level keyed by `level.level`; a second level with the same key replaces the first.
    pub fn with_level(mut self, level: LevelContent) -> Self {
        self.levels.insert(level.level, level);
        self
    }

    pub fn with_media(mut self, id: &str, media_type: MediaType, filename: &str, title: &str, description: &str) -> Self {
        self.media.push(MediaRef {
            id: id.to_string(),
            media_type,
            filename: filename.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        });
        self
    }

    pub fn with_citation(mut self, citation: Citation) -> Self {
        self.citations.push(citation);
        self
    }

    pub fn with_cross_reference(
        mut self,
        target_id: &str,
        target_type: ContentType,
        relationship: Relationship,
        label: &str,
    ) -> Self {
        self.cross_references.push(CrossReference {
            target_id: target_id.to_string(),
            target_type,
            relationship,
            label: label.to_string(),
        });
        self
    }

    pub fn with_lifecycle(mut self, created_at: &str, updated_at: &str, version: u32, status: ContentStatus) -> Self {
        self.created_at = created_at.to_string();
        self.updated_at = updated_at.to_string();
        self.version = version;
        self.status = status;
        self
    }

    pub fn with_contributors(mut self, contributors: &[&str]) -> Self {
        self.contributors.extend(contributors.iter().map(|s| s.to_string()));
        self
    }

    pub fn level(&self, level: ComplexityLevel) -> Option<&LevelContent> {
        self.levels.get(&level)
    }

    /// Hierarchical facet used by the text index, e.g. `/condition/renal`.
    pub fn facet_path(&self) -> String {
        match self.tags.systems.first() {
            Some(system) => format!("/{}/{}", self.content_type.as_str(), system),
            None => format!("/{}", self.content_type.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyLevel {
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

/// Older lesson-style content: markdown body per level plus flashcards and a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyEducationalContent {
    pub id: ContentId,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub description: String,
    #[serde(default, rename = "titleEs", skip_serializing_if = "Option::is_none")]
    pub title_es: Option<String>,
    pub levels: BTreeMap<ComplexityLevel, LegacyLevel>,
}

impl LegacyEducationalContent {
    /// Upgrades a legacy lesson into the current record shape.
    ///
    /// Level descriptions become summaries, lesson bodies become explanations
    /// and flashcards become key terms (front as term, back as definition).
    /// The result is left in `review` status. Quizzes stay on the legacy record.
    pub fn to_educational(&self, imported_on: &str) -> EducationalContent {
        let category = self.category.to_lowercase();
        let subcategory = self.subcategory.to_lowercase();
        let mut tags = ContentTags::new(&[], &[], &[], ClinicalRelevance::Medium);
        tags.systems.push(category.replace(' ', "-"));
        tags.topics.push(subcategory.replace(' ', "-"));
        tags.keywords.push(self.title.to_lowercase());

        let mut content = EducationalContent::new(&self.id, ContentType::Topic, &self.title, tags)
            .with_lifecycle(imported_on, imported_on, 1, ContentStatus::Review);
        content.name_es = self.title_es.clone();
        for (level, legacy) in &self.levels {
            let summary = if legacy.description.trim().is_empty() { &self.description } else { &legacy.description };
            let mut body = LevelContent::new(*level, summary, &legacy.content);
            body.key_terms = legacy
                .flashcards
                .iter()
                .map(|card| KeyTerm { term: card.front.clone(), definition: card.back.clone() })
                .collect();
            content = content.with_level(body);
        }
        content
    }
}

/// A single record at a single level, flattened for text indexing.
///
/// - `id`: `"<content_id>:<level>"`
/// - `category`: hierarchical facet (e.g., "/condition/renal")
/// - `text`: summary, explanation and key terms joined by blank lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDocument {
    pub id: String,
    pub content_id: ContentId,
    pub level: ComplexityLevel,
    pub content_type: ContentType,
    pub category: String,
    pub name: String,
    pub text: String,
}

/// The minimal surface returned by the text engine.
///
/// `id` matches `LevelDocument::id`; higher `score` is better.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub content_id: ContentId,
    pub level: ComplexityLevel,
    pub score: f32,
}
