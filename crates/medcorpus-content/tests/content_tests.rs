use std::collections::HashSet;

use medcorpus_content::index::{built_in_content, LEGACY_IMPORT_DATE};
use medcorpus_content::{
    build_registry, get_content_by_id, get_content_by_keyword, get_content_by_system, get_content_by_type,
    get_content_count, get_legacy_content_by_id, search_content, CONTENT_REGISTRY, LEGACY_CONTENT_REGISTRY,
};
use medcorpus_core::render::{parse_levels, render_markdown};
use medcorpus_core::types::{
    ClinicalRelevance, ComplexityLevel, ContentStatus, ContentTags, ContentType, EducationalContent, LevelContent,
};
use medcorpus_core::validation::{find_duplicate_ids, validate_legacy, validate_registry};
use medcorpus_core::{Error, Record};

#[test]
fn test_registry_lookup_and_count() {
    assert_eq!(get_content_count(), 6);
    assert_eq!(get_content_count(), CONTENT_REGISTRY.iter().count());
    for id in CONTENT_REGISTRY.ids() {
        assert_eq!(get_content_by_id(id).unwrap().id, id);
    }
    assert!(get_content_by_id("missing").is_none());
}

#[test]
fn test_built_in_ids_unique() {
    let report = find_duplicate_ids(&built_in_content());
    assert!(report.is_valid(), "{:?}", report.issues);
}

#[test]
fn test_every_built_in_record_validates() {
    let report = validate_registry(&CONTENT_REGISTRY);
    let errors: Vec<String> = report.errors().map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "validation errors:\n{}", errors.join("\n"));

    // Strict (production) validation treats warnings as failures.
    let warnings: Vec<String> = report.warnings().map(|w| w.to_string()).collect();
    assert!(warnings.is_empty(), "validation warnings:\n{}", warnings.join("\n"));
}

#[test]
fn test_every_record_has_all_levels() {
    for content in CONTENT_REGISTRY.iter() {
        for level in ComplexityLevel::ALL {
            let body = content.level(level).unwrap_or_else(|| panic!("{} missing level {}", content.id, level));
            assert_eq!(body.level, level);
        }
    }
}

#[test]
fn test_render_round_trip_for_all_records() {
    for content in CONTENT_REGISTRY.iter() {
        let parsed = parse_levels(&render_markdown(content)).unwrap();
        let keys: Vec<_> = parsed.keys().copied().collect();
        let expected: Vec<_> = content.levels.keys().copied().collect();
        assert_eq!(keys, expected, "{}", content.id);
        for (level, body) in &content.levels {
            let rendered = &parsed[level];
            assert_eq!(rendered.summary, body.summary.trim(), "{} level {}", content.id, level);
            assert_eq!(rendered.explanation, body.explanation.trim(), "{} level {}", content.id, level);
            assert_eq!(rendered.key_terms, body.key_terms, "{} level {}", content.id, level);
            assert_eq!(rendered.analogies, body.analogies, "{} level {}", content.id, level);
            assert_eq!(rendered.examples, body.examples, "{} level {}", content.id, level);
            assert_eq!(rendered.patient_counseling_points, body.patient_counseling_points, "{} level {}", content.id, level);
            assert_eq!(
                rendered.clinical_notes.as_deref(),
                body.clinical_notes.as_deref().map(str::trim),
                "{} level {}",
                content.id,
                level
            );
        }
    }
}

#[test]
fn test_render_keeps_authored_analogies() {
    let aki = get_content_by_id("acute-kidney-injury").unwrap();
    let markdown = render_markdown(aki);
    for body in aki.levels.values() {
        for text in body.analogies.iter().chain(&body.examples).chain(&body.patient_counseling_points) {
            let first_line = text.lines().next().unwrap_or_default();
            assert!(markdown.contains(first_line), "missing '{}'", first_line);
        }
    }
    assert!(markdown.contains("coffee filter"));
}

#[test]
fn test_search_content() {
    assert_eq!(search_content("").len(), get_content_count());

    let hits: Vec<&str> = search_content("AKI").iter().map(|c| c.id.as_str()).collect();
    assert!(hits.contains(&"acute-kidney-injury"));

    let hits: Vec<&str> = search_content("hemograma").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(hits, vec!["complete-blood-count"]);

    for hit in search_content("renal") {
        assert!(hit.search_fields().iter().any(|f| f.to_lowercase().contains("renal")));
    }
}

#[test]
fn test_filters() {
    let conditions = get_content_by_type(ContentType::Condition);
    assert_eq!(conditions.len(), 2);
    assert!(conditions.iter().all(|c| c.content_type == ContentType::Condition));

    let renal: Vec<&str> = get_content_by_system("RENAL").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(renal, vec!["acute-kidney-injury", "glomerular-filtration"]);
    assert!(get_content_by_system("ren").is_empty());

    let cbc: Vec<&str> = get_content_by_keyword("hemoglobin").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(cbc, vec!["complete-blood-count"]);
}

#[test]
fn test_legacy_lesson_is_registered_and_upgraded() {
    assert_eq!(LEGACY_CONTENT_REGISTRY.count(), 1);
    let lesson = get_legacy_content_by_id("fertilization").unwrap();
    assert!(validate_legacy(lesson).is_valid());
    assert_eq!(lesson.levels.len(), 5);

    let upgraded = get_content_by_id("fertilization").unwrap();
    assert_eq!(upgraded.content_type, ContentType::Topic);
    assert_eq!(upgraded.status, ContentStatus::Review);
    assert_eq!(upgraded.created_at, LEGACY_IMPORT_DATE);
    assert_eq!(upgraded.tags.systems, vec!["embryology"]);
    assert_eq!(upgraded.tags.topics, vec!["general-embryology"]);
    assert_eq!(upgraded.level(ComplexityLevel::Lay).unwrap().summary, lesson.levels[&ComplexityLevel::Lay].description);
    assert_eq!(upgraded.name_es.as_deref(), Some("Fecundación"));

    for (level, legacy) in &lesson.levels {
        let terms: Vec<(&str, &str)> =
            upgraded.levels[level].key_terms.iter().map(|t| (t.term.as_str(), t.definition.as_str())).collect();
        let cards: Vec<(&str, &str)> = legacy.flashcards.iter().map(|c| (c.front.as_str(), c.back.as_str())).collect();
        assert!(!terms.is_empty(), "level {} has no key terms", level);
        assert_eq!(terms, cards, "level {}", level);
    }
}

#[test]
fn test_build_registry_rejects_colliding_pack() {
    let duplicate = EducationalContent::new(
        "informed-consent",
        ContentType::Concept,
        "Informed Consent",
        ContentTags::new(&["medical-law"], &[], &[], ClinicalRelevance::Low),
    );
    match build_registry(vec![duplicate]) {
        Err(Error::DuplicateId(id)) => assert_eq!(id, "informed-consent"),
        other => panic!("expected duplicate id error, got {:?}", other.map(|r| r.count())),
    }

    let extra = EducationalContent::new(
        "nephrotic-syndrome",
        ContentType::Condition,
        "Nephrotic Syndrome",
        ContentTags::new(&["renal"], &[], &[], ClinicalRelevance::Medium),
    )
    .with_level(LevelContent::new(ComplexityLevel::Lay, "Protein leaks into the urine.", "Swelling and foamy urine."));
    let registry = build_registry(vec![extra]).unwrap();
    assert_eq!(registry.count(), get_content_count() + 1);
    assert_eq!(registry.ids().last(), Some("nephrotic-syndrome"));
}

#[test]
fn test_no_box_drawing_or_empty_spanish_names() {
    let mut seen = HashSet::new();
    for content in CONTENT_REGISTRY.iter() {
        assert!(seen.insert(content.id.clone()));
        for body in content.levels.values() {
            assert!(!body.explanation.chars().any(|c| ('\u{2500}'..='\u{257F}').contains(&c)), "{}", content.id);
        }
        if let Some(name_es) = &content.name_es {
            assert!(!name_es.trim().is_empty());
        }
    }
}
