//! Laboratory interpretation records.

use medcorpus_core::types::{
    Citation, CitationType, ClinicalRelevance, ComplexityLevel, ContentStatus, ContentTags, ContentType,
    EducationalContent, LevelContent, Relationship,
};

pub fn complete_blood_count() -> EducationalContent {
    let tags = ContentTags::new(
        &["hematology"],
        &["lab-interpretation", "anemia"],
        &["cbc", "hemoglobin", "mcv", "white blood cells", "platelets"],
        ClinicalRelevance::High,
    )
    .exam(true, true, &["internal-medicine", "pediatrics"]);

    EducationalContent::new("complete-blood-count", ContentType::Concept, "Complete Blood Count", tags)
        .with_name_es("Hemograma completo")
        .with_alternate_names(&["CBC", "Full blood count", "FBC", "Biometría hemática"])
        .with_level(
            LevelContent::new(
                ComplexityLevel::Lay,
                "A complete blood count is a common blood test that counts your red cells, white cells and platelets.",
                r#"
Red blood cells carry oxygen, white blood cells fight infection and platelets help blood clot. The
test shows whether any of these are too high or too low.

A low red cell count (anemia) can make you tired and short of breath. A high white cell count often
means your body is fighting an infection. Low platelets can cause easy bruising.
"#,
            )
            .with_key_terms(&[
                ("Red blood cells", "Cells that carry oxygen from the lungs to the body."),
                ("White blood cells", "Cells that fight infection."),
                ("Platelets", "Small cell pieces that help blood clot."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Informed,
                "The CBC reports hemoglobin, hematocrit, red cell size, white cell count with differential, and platelet count against reference ranges.",
                r#"
Key results:

- Hemoglobin: about 12-16 g/dL in women and 13.5-17.5 g/dL in men.
- MCV (mean corpuscular volume): the average red cell size, 80-100 fL.
- White cell count: 4,000-11,000 per microliter, with a differential showing neutrophils,
  lymphocytes, monocytes, eosinophils and basophils.
- Platelets: 150,000-450,000 per microliter.

A result slightly outside the range is not always abnormal; about one in twenty healthy people fall
outside a reference range for any single test.
"#,
            )
            .with_key_terms(&[
                ("Hemoglobin", "The oxygen-carrying protein in red blood cells."),
                ("MCV", "Mean corpuscular volume, the average size of red blood cells."),
                ("Differential", "The breakdown of white blood cells by type."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Student,
                "Classify anemia by MCV into microcytic, normocytic and macrocytic, then use the reticulocyte count to separate underproduction from loss or destruction.",
                r#"
- Microcytic (MCV <80 fL): iron deficiency, thalassemia, anemia of chronic disease, sideroblastic
  anemia. Ferritin below 30 ng/mL confirms iron deficiency.
- Normocytic (80-100 fL): acute blood loss, hemolysis, chronic kidney disease, anemia of
  inflammation.
- Macrocytic (MCV >100 fL): vitamin B12 or folate deficiency (megaloblastic, with hypersegmented
  neutrophils), alcohol, liver disease, hypothyroidism, myelodysplasia.

A corrected reticulocyte index above 2% indicates an appropriate marrow response to hemolysis or
bleeding; below 2% indicates hypoproliferation. RDW is raised in iron deficiency and normal in
thalassemia trait.
"#,
            )
            .with_key_terms(&[
                ("Reticulocyte index", "Reticulocyte count corrected for hematocrit, reflecting marrow output."),
                ("RDW", "Red cell distribution width, a measure of variation in red cell size."),
                ("Hypersegmented neutrophil", "A neutrophil with six or more lobes, typical of megaloblastic anemia."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Clinician,
                "Interpret CBC abnormalities in clinical context, repeat unexpected isolated results, and review the peripheral smear when more than one cell line is affected.",
                r#"
Pancytopenia warrants a peripheral smear and often bone marrow examination to exclude aplastic
anemia, marrow infiltration or leukemia. Schistocytes with thrombocytopenia demand urgent evaluation
for thrombotic microangiopathy.

Pseudothrombocytopenia from EDTA-induced platelet clumping is excluded by repeating the count in a
citrate tube.

Neutrophilia with a left shift suggests bacterial infection; an absolute neutrophil count below 500
per microliter defines severe neutropenia and, with fever, is a medical emergency. Eosinophilia
prompts review of drugs, parasites, allergy and adrenal insufficiency.

In AKI, a falling hemoglobin with schistocytes and low platelets suggests hemolytic uremic syndrome.
"#,
            )
            .with_key_terms(&[
                ("Pancytopenia", "Reduction of red cells, white cells and platelets together."),
                ("Schistocytes", "Fragmented red cells seen in microangiopathic hemolysis."),
                ("Absolute neutrophil count", "Total white cell count multiplied by the neutrophil fraction."),
            ])
            .with_clinical_notes("Transfuse red cells at hemoglobin <7 g/dL in most stable inpatients."),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Expert,
                "Modern hematology analyzers combine impedance, flow cytometry and fluorescence, and their research parameters support earlier detection of iron-restricted erythropoiesis and marrow disorders.",
                r#"
Reticulocyte hemoglobin content (CHr or Ret-He) reflects iron available to erythropoiesis over the
previous three to four days and detects functional iron deficiency in CKD and inflammation before
the MCV falls.

Immature platelet fraction separates consumptive from hypoproductive thrombocytopenia. Flags such
as atypical lymphocytes or blasts trigger smear review under laboratory rules.

Reference intervals vary with ancestry, altitude and age; benign ethnic neutropenia (Duffy-null
phenotype) should not be mistaken for pathology.
"#,
            )
            .with_key_terms(&[
                ("Ret-He", "Reticulocyte hemoglobin equivalent, an early marker of iron-restricted erythropoiesis."),
                ("Immature platelet fraction", "Proportion of young platelets, high when platelets are consumed."),
                ("Duffy-null phenotype", "Common red cell phenotype associated with lower neutrophil counts."),
            ]),
        )
        .with_citation(
            Citation::new(
                "tefferi-cbc-mayo-2005",
                CitationType::Article,
                "How to interpret and pursue an abnormal complete blood cell count in adults",
                &["Tefferi A", "Hanson CA", "Inwards DJ"],
                "Mayo Clinic Proceedings",
            )
            .year(2005),
        )
        .with_cross_reference(
            "acute-kidney-injury",
            ContentType::Condition,
            Relationship::SeeAlso,
            "Acute kidney injury",
        )
        .with_lifecycle("2024-01-15", "2024-08-21", 2, ContentStatus::Published)
}
