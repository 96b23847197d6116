use medcorpus_content::obgyn::{clinical_priority, OBGYN_CONDITIONS};
use medcorpus_content::{
    get_obgyn_by_category, get_obgyn_by_risk_factor, get_obgyn_condition_by_id, get_obgyn_condition_count,
    search_obgyn_conditions, OBGYNCategory, OBGYN_CATEGORIES, OBGYN_CLINICAL_PRIORITY,
};
use medcorpus_core::types::ClinicalRelevance;
use medcorpus_core::validation::is_valid_icd11;
use medcorpus_core::Record;

fn ids(entries: &[&medcorpus_content::OBGYNConditionEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn test_database_scenario() {
    assert_eq!(get_obgyn_condition_count(), 6);

    let pcos = get_obgyn_condition_by_id("pcos").expect("pcos is built in");
    assert_eq!(pcos.category, OBGYNCategory::ReproductiveEndocrine);

    let hits = search_obgyn_conditions("preeclampsia");
    assert_eq!(ids(&hits), vec!["preeclampsia"]);

    let hits = get_obgyn_by_risk_factor("obesity");
    assert_eq!(ids(&hits), vec!["preeclampsia", "pcos"]);
}

#[test]
fn test_lookup_by_every_id() {
    for entry in OBGYN_CONDITIONS.iter() {
        let found = get_obgyn_condition_by_id(&entry.id).expect("registered id resolves");
        assert_eq!(found.id, entry.id);
    }
    assert!(get_obgyn_condition_by_id("not-a-condition").is_none());
    assert!(get_obgyn_condition_by_id("").is_none());
}

#[test]
fn test_search_behaviour() {
    assert_eq!(search_obgyn_conditions("").len(), get_obgyn_condition_count());
    assert!(search_obgyn_conditions("no such words anywhere").is_empty());

    // Case-insensitive, and Spanish fields are searched.
    assert_eq!(ids(&search_obgyn_conditions("ECTOPIC")), vec!["ectopic-pregnancy"]);
    assert_eq!(ids(&search_obgyn_conditions("miomas")), vec!["uterine-fibroids"]);

    for query in ["pregnancy", "uter", "hormon"] {
        for hit in search_obgyn_conditions(query) {
            let q = query.to_lowercase();
            assert!(
                hit.search_fields().iter().any(|f| f.to_lowercase().contains(&q)),
                "{} returned for {} without a matching field",
                hit.id,
                query
            );
        }
    }
}

#[test]
fn test_search_keeps_insertion_order() {
    let hits = search_obgyn_conditions("obstetric");
    assert_eq!(ids(&hits), vec!["preeclampsia", "gestational-diabetes", "ectopic-pregnancy"]);
}

#[test]
fn test_category_filter_partitions_database() {
    let mut total = 0;
    for category in OBGYNCategory::ALL {
        let entries = get_obgyn_by_category(category);
        assert!(entries.iter().all(|e| e.category == category));
        total += entries.len();
    }
    assert_eq!(total, get_obgyn_condition_count());
    assert_eq!(get_obgyn_by_category(OBGYNCategory::Gynecologic).len(), 2);
    assert!(get_obgyn_by_category(OBGYNCategory::Oncologic).is_empty());
}

#[test]
fn test_risk_factor_filter() {
    for term in ["obesity", "prior", "FAMILY HISTORY"] {
        let needle = term.to_lowercase();
        for entry in get_obgyn_by_risk_factor(term) {
            assert!(entry.risk_factors.iter().any(|r| r.to_lowercase().contains(&needle)));
        }
    }
    assert!(get_obgyn_by_risk_factor("asbestos").is_empty());
}

#[test]
fn test_category_parse_and_labels() {
    assert_eq!("reproductive-endocrine".parse::<OBGYNCategory>().unwrap(), OBGYNCategory::ReproductiveEndocrine);
    assert!("endocrine".parse::<OBGYNCategory>().is_err());
    assert_eq!(OBGYNCategory::Urogynecologic.to_string(), "urogynecologic");

    assert_eq!(OBGYN_CATEGORIES.len(), 5);
    let obstetric = OBGYN_CATEGORIES.iter().find(|c| c.id == OBGYNCategory::Obstetric).unwrap();
    assert_eq!(obstetric.label_es, "Obstétrica");
}

#[test]
fn test_entries_are_complete() {
    for entry in OBGYN_CONDITIONS.iter() {
        assert!(is_valid_icd11(&entry.icd11), "{} has ICD-11 code {}", entry.id, entry.icd11);
        assert!(!entry.name_es.is_empty());
        assert!(!entry.description_es.is_empty());
        assert!(!entry.patient_explanation_es.is_empty());
        assert!(!entry.risk_factors.is_empty());
        assert!(!entry.symptoms.is_empty());
        assert!(!entry.diagnostics.initial.is_empty());
        assert!(!entry.treatment.first_line.is_empty());
        assert!(!entry.emergency_signs.is_empty());
    }
}

#[test]
fn test_clinical_priority_covers_every_entry() {
    assert_eq!(OBGYN_CLINICAL_PRIORITY.len(), get_obgyn_condition_count());
    for entry in OBGYN_CONDITIONS.iter() {
        assert!(clinical_priority(&entry.id).is_some(), "{} has no priority", entry.id);
    }
    assert_eq!(clinical_priority("ectopic-pregnancy"), Some(ClinicalRelevance::Critical));
    assert_eq!(clinical_priority("unknown"), None);
}

#[test]
fn test_entry_serializes_camel_case() {
    let entry = get_obgyn_condition_by_id("endometriosis").unwrap();
    let json = serde_json::to_value(entry).unwrap();
    assert_eq!(json["category"], "gynecologic");
    assert_eq!(json["nameEs"], "Endometriosis");
    assert!(json["treatment"]["firstLine"].is_string());
    assert!(json["emergencySigns"].is_array());
}
