//! Registry of every built-in record and the lookup helpers over it.

use once_cell::sync::Lazy;
use tracing::debug;

use medcorpus_core::registry::{any_contains, Registry};
use medcorpus_core::types::{ContentType, EducationalContent, LegacyEducationalContent};
use medcorpus_core::Result;

use crate::{conditions, embryology, lab_interpretation, legal, physiology};

/// Date stamped on legacy lessons when they are upgraded into the current record shape.
pub const LEGACY_IMPORT_DATE: &str = "2024-06-01";

pub static LEGACY_CONTENT_REGISTRY: Lazy<Registry<LegacyEducationalContent>> =
    Lazy::new(|| Registry::from_entries(legacy_content()));

pub static CONTENT_REGISTRY: Lazy<Registry<EducationalContent>> = Lazy::new(|| {
    let registry = Registry::from_entries(built_in_content());
    debug!(records = registry.count(), "content registry built");
    registry
});

/// Legacy lessons, in their original shape.
pub fn legacy_content() -> Vec<LegacyEducationalContent> {
    vec![embryology::fertilization()]
}

/// Every built-in record, with legacy lessons upgraded.
pub fn built_in_content() -> Vec<EducationalContent> {
    let mut all = vec![
        conditions::acute_kidney_injury(),
        conditions::polycystic_ovary_syndrome(),
        physiology::glomerular_filtration(),
        lab_interpretation::complete_blood_count(),
        legal::informed_consent(),
    ];
    all.extend(legacy_content().iter().map(|lesson| lesson.to_educational(LEGACY_IMPORT_DATE)));
    all
}

/// Built-in records followed by `extra`, rejecting any id collision.
pub fn build_registry(extra: Vec<EducationalContent>) -> Result<Registry<EducationalContent>> {
    let mut registry = Registry::try_from_entries(built_in_content())?;
    registry.extend_strict(extra)?;
    Ok(registry)
}

pub fn get_content_by_id(id: &str) -> Option<&'static EducationalContent> {
    CONTENT_REGISTRY.get(id)
}

pub fn get_legacy_content_by_id(id: &str) -> Option<&'static LegacyEducationalContent> {
    LEGACY_CONTENT_REGISTRY.get(id)
}

/// Case-insensitive search over id, names, alternate names, topics, keywords and level summaries.
pub fn search_content(query: &str) -> Vec<&'static EducationalContent> {
    CONTENT_REGISTRY.search(query)
}

pub fn get_content_by_type(content_type: ContentType) -> Vec<&'static EducationalContent> {
    CONTENT_REGISTRY.filter(|c| c.content_type == content_type)
}

/// Records tagged with `system`, compared case-insensitively.
pub fn get_content_by_system(system: &str) -> Vec<&'static EducationalContent> {
    CONTENT_REGISTRY.filter(|c| c.tags.systems.iter().any(|s| s.eq_ignore_ascii_case(system)))
}

/// Records whose keywords mention `term`.
pub fn get_content_by_keyword(term: &str) -> Vec<&'static EducationalContent> {
    CONTENT_REGISTRY.filter(|c| any_contains(&c.tags.keywords, term))
}

pub fn get_content_count() -> usize {
    CONTENT_REGISTRY.count()
}
