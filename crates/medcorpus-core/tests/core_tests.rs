use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

use figment::providers::{Format, Serialized, Toml};
use figment::Figment;

use medcorpus_core::config::{resolve_with_base, Config, CorpusSettings};
use medcorpus_core::loader::{level_documents, ContentLoader};
use medcorpus_core::registry::{any_contains, Registry};
use medcorpus_core::render::{parse_levels, render_markdown};
use medcorpus_core::types::*;
use medcorpus_core::validation::{
    find_duplicate_ids, is_valid_icd11, validate_content, validate_legacy, validate_registry, IssueCategory, Severity,
};
use medcorpus_core::Error;

fn sample(id: &str) -> EducationalContent {
    let mut content = EducationalContent::new(
        id,
        ContentType::Concept,
        "Sample Topic",
        ContentTags::new(&["renal"], &["nephrology"], &["sample", "kidney"], ClinicalRelevance::Medium),
    )
    .with_name_es("Tema de ejemplo")
    .with_lifecycle("2025-03-01", "2025-03-04", 1, ContentStatus::Published);
    for level in ComplexityLevel::ALL {
        content = content.with_level(
            LevelContent::new(
                level,
                &format!("Summary for level {}.", level),
                &format!("## Heading\n\nExplanation for level {}.\n\n- a bullet", level),
            )
            .with_key_terms(&[("term", "a definition")]),
        );
    }
    content
}

#[test]
fn complexity_level_rejects_out_of_range() {
    assert_eq!(ComplexityLevel::try_from(3).map(u8::from).ok(), Some(3));
    assert!(matches!(ComplexityLevel::try_from(0), Err(Error::InvalidLevel(0))));
    assert!(matches!(ComplexityLevel::try_from(6), Err(Error::InvalidLevel(6))));
}

#[test]
fn json_level_keys_outside_one_to_five_fail_to_load() {
    let mut value = serde_json::to_value(sample("x")).unwrap();
    let levels = value["levels"].as_object_mut().unwrap();
    let level_one = levels["1"].clone();
    levels.insert("7".to_string(), level_one);
    let parsed: Result<EducationalContent, _> = serde_json::from_value(value);
    assert!(parsed.is_err(), "level 7 must be rejected");
}

#[test]
fn json_roundtrip_uses_camel_case_field_names() {
    let json = serde_json::to_value(sample("x")).unwrap();
    assert_eq!(json["type"], "concept");
    assert_eq!(json["nameEs"], "Tema de ejemplo");
    assert_eq!(json["levels"]["2"]["keyTerms"][0]["term"], "term");
    assert_eq!(json["tags"]["clinicalRelevance"], "medium");
    let back: EducationalContent = serde_json::from_value(json).unwrap();
    assert_eq!(back, sample("x"));
}

#[test]
fn registry_lookup_search_and_count() {
    let mut other = sample("beta");
    other.name = "Liver Basics".to_string();
    other.tags.keywords = vec!["hepatic".to_string()];
    other.tags.topics = vec!["hepatology".to_string()];
    other.name_es = None;
    for level in other.levels.values_mut() {
        level.summary = "About the liver.".to_string();
    }
    let registry = Registry::from_entries(vec![sample("alpha"), other]);

    assert_eq!(registry.count(), 2);
    for id in ["alpha", "beta"] {
        assert_eq!(registry.get(id).map(|c| c.id.as_str()), Some(id));
    }
    assert!(registry.get("missing").is_none());

    assert_eq!(registry.search("").len(), 2, "empty query matches everything");
    let hits = registry.search("KIDNEY");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "alpha");
    assert!(registry.search("no such words").is_empty());

    let ordered: Vec<&str> = registry.ids().collect();
    assert_eq!(ordered, vec!["alpha", "beta"]);
}

#[test]
fn registry_upsert_keeps_position_and_strict_rejects() {
    let mut replacement = sample("alpha");
    replacement.name = "Replaced".to_string();
    let registry = Registry::from_entries(vec![sample("alpha"), sample("beta"), replacement.clone()]);
    assert_eq!(registry.count(), 2);
    assert_eq!(registry.iter().next().map(|c| c.name.as_str()), Some("Replaced"));

    let strict = Registry::try_from_entries(vec![sample("alpha"), replacement]);
    assert!(matches!(strict, Err(Error::DuplicateId(id)) if id == "alpha"));
}

#[test]
fn any_contains_is_case_insensitive() {
    let items = ["Obesity (BMI >30)", "Prior preeclampsia"];
    assert!(any_contains(&items, "obesity"));
    assert!(any_contains(&items, "PREECLAMPSIA"));
    assert!(!any_contains(&items, "smoking"));
}

#[test]
fn render_then_parse_preserves_levels() {
    let content = sample("alpha");
    let markdown = render_markdown(&content);
    let parsed = parse_levels(&markdown).expect("parse");

    let authored: Vec<ComplexityLevel> = content.levels.keys().copied().collect();
    let recovered: Vec<ComplexityLevel> = parsed.keys().copied().collect();
    assert_eq!(authored, recovered);
    for (level, body) in &content.levels {
        let back = &parsed[level];
        assert_eq!(back.summary, body.summary);
        assert_eq!(back.explanation, body.explanation);
        assert_eq!(back.key_terms, body.key_terms);
    }
}

#[test]
fn render_then_parse_keeps_partial_level_sets() {
    let mut content = sample("alpha");
    content.levels.retain(|level, _| matches!(level, ComplexityLevel::Lay | ComplexityLevel::Expert));
    let parsed = parse_levels(&render_markdown(&content)).expect("parse");
    assert_eq!(parsed.keys().copied().collect::<Vec<_>>(), vec![ComplexityLevel::Lay, ComplexityLevel::Expert]);
}

#[test]
fn render_then_parse_keeps_multi_line_key_terms() {
    let mut content = sample("alpha");
    content.levels.retain(|level, _| *level == ComplexityLevel::Lay);
    let lay = content.levels.get_mut(&ComplexityLevel::Lay).unwrap();
    lay.key_terms = vec![
        KeyTerm { term: "GFR".to_string(), definition: "line one\nline two".to_string() },
        KeyTerm { term: "Gap".to_string(), definition: "before\n\nafter a blank line".to_string() },
    ];

    let parsed = parse_levels(&render_markdown(&content)).expect("multi-line definitions parse");
    assert_eq!(parsed[&ComplexityLevel::Lay].key_terms, content.levels[&ComplexityLevel::Lay].key_terms);
}

#[test]
fn render_then_parse_keeps_supplementary_sections() {
    let mut content = sample("alpha");
    let expert = content.levels.remove(&ComplexityLevel::Expert).unwrap();
    content = content.with_level(
        expert
            .with_analogies(&["The kidneys work like a coffee filter", "A sieve\nwith two holes"])
            .with_examples(&["Creatinine rising from 1.0 to 1.6 mg/dL in 48 hours"])
            .with_counseling(&["Avoid NSAIDs", "Drink water\n  unless told otherwise"])
            .with_clinical_notes("KDIGO stage 1.\n\nRecheck in 48 hours."),
    );

    let markdown = render_markdown(&content);
    assert!(markdown.contains("- The kidneys work like a coffee filter"));

    let parsed = parse_levels(&markdown).expect("parse");
    let back = &parsed[&ComplexityLevel::Expert];
    let body = &content.levels[&ComplexityLevel::Expert];
    assert_eq!(back.analogies, body.analogies);
    assert_eq!(back.examples, body.examples);
    assert_eq!(back.patient_counseling_points, body.patient_counseling_points);
    assert_eq!(back.clinical_notes, body.clinical_notes);

    let lay = &parsed[&ComplexityLevel::Lay];
    assert!(lay.analogies.is_empty() && lay.examples.is_empty() && lay.patient_counseling_points.is_empty());
    assert_eq!(lay.clinical_notes, None);
}

#[test]
fn parse_rejects_bad_markers() {
    assert!(matches!(parse_levels("<!-- level:9 -->\n<!-- /level -->"), Err(Error::InvalidLevel(9))));
    assert!(matches!(parse_levels("<!-- level:2 -->\n<!-- summary -->\ntext"), Err(Error::Parse { line: 1, .. })));
    let twice = "<!-- level:1 -->\n<!-- /level -->\n<!-- level:1 -->\n<!-- /level -->";
    assert!(matches!(parse_levels(twice), Err(Error::Parse { line: 3, .. })));
    let bad_term = "<!-- level:1 -->\n<!-- key-terms -->\nnot a term\n<!-- /level -->";
    assert!(matches!(parse_levels(bad_term), Err(Error::Parse { line: 3, .. })));
    let orphan = "<!-- level:1 -->\n<!-- examples -->\n  dangling\n<!-- /level -->";
    assert!(matches!(parse_levels(orphan), Err(Error::Parse { line: 3, .. })));
    let bad_item = "<!-- level:1 -->\n<!-- analogies -->\nno dash\n<!-- /level -->";
    assert!(matches!(parse_levels(bad_item), Err(Error::Parse { line: 3, .. })));
}

#[test]
fn validation_passes_complete_record() {
    let report = validate_content(&sample("alpha"), None);
    assert!(report.is_valid(), "{:?}", report.issues);
    assert_eq!(report.warnings().count(), 0);
}

#[test]
fn validation_flags_missing_levels_and_placeholders() {
    let mut content = sample("alpha");
    content.levels.remove(&ComplexityLevel::Clinician);
    if let Some(level) = content.levels.get_mut(&ComplexityLevel::Lay) {
        level.summary = "TODO write this".to_string();
        level.key_terms.clear();
    }
    content.name_es = None;
    content.version = 0;
    content.updated_at = "2025-02-01".to_string();

    let report = validate_content(&content, None);
    let messages: Vec<&str> = report.issues.iter().map(|i| i.message.as_str()).collect();
    assert!(messages.contains(&"Missing complexity level 4"));
    assert!(messages.contains(&"Level 1: summary contains placeholder text"));
    assert!(messages.contains(&"Level 1: Missing keyTerms array"));
    assert!(messages.contains(&"Missing Spanish translation (nameEs)"));
    assert!(messages.contains(&"Invalid version: 0. Must be a positive number."));
    assert!(report.warnings().any(|i| i.category == IssueCategory::Metadata));
    assert!(!report.is_valid());
}

#[test]
fn validation_ignores_spanish_todo() {
    let mut content = sample("alpha");
    if let Some(level) = content.levels.get_mut(&ComplexityLevel::Lay) {
        level.summary = "Afecta todo el cuerpo.".to_string();
    }
    assert!(validate_content(&content, None).is_valid());
}

#[test]
fn validation_checks_cross_references_against_registry() {
    let linked = sample("alpha").with_cross_reference("beta", ContentType::Concept, Relationship::Related, "Beta");
    let dangling = sample("gamma").with_cross_reference("nowhere", ContentType::Topic, Relationship::SeeAlso, "Nowhere");
    let registry = Registry::from_entries(vec![linked, sample("beta"), dangling]);
    let report = validate_registry(&registry);
    let dangling_issues: Vec<_> = report.issues.iter().filter(|i| i.category == IssueCategory::CrossReference).collect();
    assert_eq!(dangling_issues.len(), 1);
    assert_eq!(dangling_issues[0].content_id, "gamma");
    assert_eq!(dangling_issues[0].severity, Severity::Warning);
}

#[test]
fn validation_reports_bad_dates_and_duplicates() {
    let mut content = sample("alpha");
    content.created_at = "03/01/2025".to_string();
    let report = validate_content(&content, None);
    assert!(report.errors().any(|i| i.message == "Invalid createdAt format: 03/01/2025"));

    let dupes = find_duplicate_ids(&[sample("a"), sample("b"), sample("a")]);
    assert_eq!(dupes.errors().count(), 1);
}

#[test]
fn icd11_shapes() {
    for code in ["JA24", "5A80.1", "GA10", "2E86.0", "JA01", "1A0", "GA1.2"] {
        assert!(is_valid_icd11(code), "{}", code);
    }
    for code in ["", "ja24", "J", "JA", "JA245", "JA24..1", "O14.1 ", "JA24.1234"] {
        assert!(!is_valid_icd11(code), "{}", code);
    }
}

#[test]
fn legacy_upgrade_and_quiz_checks() {
    let mut levels = std::collections::BTreeMap::new();
    levels.insert(
        ComplexityLevel::Lay,
        LegacyLevel {
            title: "Intro".to_string(),
            description: "Basics".to_string(),
            content: "\n# Intro\n\nBody text.\n".to_string(),
            flashcards: vec![Flashcard { id: "f1".to_string(), front: "Zygote".to_string(), back: "The fertilized egg".to_string() }],
            quiz: vec![QuizQuestion {
                id: "q1".to_string(),
                question: "Pick one".to_string(),
                options: vec!["a".to_string(), "b".to_string()],
                correct_answer: 2,
                explanation: "b".to_string(),
            }],
        },
    );
    let legacy = LegacyEducationalContent {
        id: "lesson".to_string(),
        title: "Lesson".to_string(),
        category: "Embryology".to_string(),
        subcategory: "General Embryology".to_string(),
        description: "A lesson".to_string(),
        title_es: Some("Lección".to_string()),
        levels,
    };

    let report = validate_legacy(&legacy);
    assert_eq!(report.errors().count(), 1);
    assert_eq!(report.issues[0].category, IssueCategory::Quiz);

    let upgraded = legacy.to_educational("2025-01-15");
    assert_eq!(upgraded.id, "lesson");
    assert_eq!(upgraded.status, ContentStatus::Review);
    assert_eq!(upgraded.tags.topics, vec!["general-embryology".to_string()]);
    let lay = upgraded.level(ComplexityLevel::Lay).unwrap();
    assert_eq!(lay.summary, "Basics");
    assert_eq!(lay.explanation, "# Intro\n\nBody text.");
    assert_eq!(upgraded.name_es.as_deref(), Some("Lección"));
    assert_eq!(lay.key_terms, vec![KeyTerm { term: "Zygote".to_string(), definition: "The fertilized egg".to_string() }]);
}

#[test]
fn loader_reads_single_and_array_packs() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::write(dir.join("a.json"), serde_json::to_string(&sample("a")).unwrap()).unwrap();
    fs::write(dir.join("nested/b.json"), serde_json::to_string(&vec![sample("b"), sample("c")]).unwrap()).unwrap();
    fs::write(dir.join("notes.txt"), "ignored").unwrap();

    let loader = ContentLoader::new();
    let contents = loader.load_directory(dir).expect("load");
    let ids: HashSet<String> = contents.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids.len(), 3);

    let limited = loader.load_directory_limited(dir, 1).expect("load limited");
    assert_eq!(limited.len(), 1, "only a.json sorts first");
    assert_eq!(limited[0].id, "a");
}

#[test]
fn loader_reports_parse_errors() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bad.json"), "{ \"id\": ").unwrap();
    let err = ContentLoader::new().load_directory(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn loader_reports_schema_errors_with_their_cause() {
    let tmp = TempDir::new().unwrap();
    let mut value = serde_json::to_value(sample("p")).unwrap();
    let levels = value["levels"].as_object_mut().unwrap();
    let level_one = levels["1"].clone();
    levels.insert("7".to_string(), level_one);
    fs::write(tmp.path().join("p.json"), serde_json::to_string_pretty(&value).unwrap()).unwrap();

    match ContentLoader::new().load_directory(tmp.path()) {
        Err(Error::Parse { line, message }) => {
            assert!(line > 0, "line should point into the file: {}", message);
            assert!(message.contains("complexity level: 7"), "{}", message);
            assert!(message.contains("p.json"), "{}", message);
        }
        other => panic!("expected parse error, got {:?}", other.map(|v| v.len())),
    }

    let mut array = serde_json::to_value(vec![sample("q")]).unwrap();
    array[0]["type"] = serde_json::Value::String("recipe".to_string());
    fs::remove_file(tmp.path().join("p.json")).unwrap();
    fs::write(tmp.path().join("q.json"), serde_json::to_string_pretty(&array).unwrap()).unwrap();
    match ContentLoader::new().load_directory(tmp.path()) {
        Err(Error::Parse { line, message }) => {
            assert!(line > 0, "{}", message);
            assert!(message.contains("recipe"), "{}", message);
        }
        other => panic!("expected parse error, got {:?}", other.map(|v| v.len())),
    }
}

#[test]
fn loader_rejects_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("no-such-packs");
    assert!(matches!(ContentLoader::new().load_directory(&missing), Err(Error::NotFound(_))));
    assert!(matches!(ContentLoader::new().load_directory_limited(&missing, 3), Err(Error::NotFound(_))));

    let file = tmp.path().join("a.json");
    fs::write(&file, serde_json::to_string(&sample("a")).unwrap()).unwrap();
    assert!(matches!(ContentLoader::new().load_directory(&file), Err(Error::NotFound(_))));
}

#[test]
fn loader_on_empty_directory() {
    let tmp = TempDir::new().unwrap();
    assert!(ContentLoader::new().load_directory(tmp.path()).unwrap().is_empty());
}

#[test]
fn level_documents_cover_each_level() {
    let docs = level_documents(&sample("alpha"));
    assert_eq!(docs.len(), 5);
    assert_eq!(docs[0].id, "alpha:1");
    assert_eq!(docs[4].level, ComplexityLevel::Expert);
    assert_eq!(docs[0].category, "/concept/renal");
    assert!(docs[0].text.contains("term: a definition"));
}

#[test]
fn config_defaults_and_overrides() {
    let figment = Figment::from(Serialized::defaults(CorpusSettings::default()))
        .merge(Toml::string("default_limit = 25\nmax_limit = 50\ncontent_dir = \"packs\""));
    let config = Config::from_figment(figment, "dev").expect("config");
    let settings = config.settings().unwrap();
    assert_eq!(settings.default_limit, 25);
    assert_eq!(settings.content_dir.as_deref(), Some("packs"));
    assert_eq!(config.get::<usize>("max_limit").unwrap(), 50);
    assert_eq!(config.env_name(), "dev");
}

#[test]
fn config_rejects_invalid_values() {
    let bad_level = Figment::from(Serialized::defaults(CorpusSettings::default())).merge(Toml::string("default_level = 7"));
    assert!(matches!(Config::from_figment(bad_level, "dev"), Err(Error::InvalidConfig(_))));

    let bad_limit = Figment::from(Serialized::defaults(CorpusSettings::default())).merge(Toml::string("default_limit = 500"));
    assert!(Config::from_figment(bad_limit, "dev").is_err());

    let prod = Figment::from(Serialized::defaults(CorpusSettings::default()));
    assert!(Config::from_figment(prod, "prod").is_err(), "production requires strict validation");
}

#[test]
fn resolve_paths_against_base() {
    let base = std::path::Path::new("/srv/corpus");
    assert_eq!(resolve_with_base(base, "packs"), base.join("packs"));
    assert_eq!(resolve_with_base(base, "/abs/packs"), std::path::PathBuf::from("/abs/packs"));
}
