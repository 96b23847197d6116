//! Physiology records.

use medcorpus_core::types::{
    Citation, CitationType, ClinicalRelevance, ComplexityLevel, ContentStatus, ContentTags, ContentType,
    EducationalContent, LevelContent, Relationship,
};

pub fn glomerular_filtration() -> EducationalContent {
    let tags = ContentTags::new(
        &["renal"],
        &["renal-physiology", "filtration"],
        &["gfr", "starling forces", "autoregulation", "egfr", "filtration fraction"],
        ClinicalRelevance::High,
    )
    .exam(true, false, &[]);

    EducationalContent::new("glomerular-filtration", ContentType::Process, "Glomerular Filtration", tags)
        .with_name_es("Filtración glomerular")
        .with_alternate_names(&["GFR", "Glomerular filtration rate", "TFG"])
        .with_level(
            LevelContent::new(
                ComplexityLevel::Lay,
                "Glomerular filtration is the first step of urine making, where tiny filters in the kidney sieve the blood.",
                r#"
Each kidney has about a million tiny filters called glomeruli. Blood flows through them and water,
salts and waste pass through while blood cells and most proteins stay behind.

Together the kidneys filter roughly 180 liters of fluid each day, but almost all of it is taken back
into the body. Only about one and a half liters leave as urine.
"#,
            )
            .with_key_terms(&[
                ("Glomerulus", "A tiny ball of blood vessels in the kidney that acts as a filter."),
                ("Filtrate", "The fluid that passes through the filter before it becomes urine."),
            ])
            .with_analogies(&["A glomerulus is like a kitchen sieve: small things pass through, large things stay."]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Informed,
                "The glomerular filtration rate (GFR) is how much blood the kidneys filter per minute and is the main measure of kidney function.",
                r#"
A normal GFR is about 90 to 120 mL per minute. Laboratories estimate it (eGFR) from blood creatinine,
age and sex. A GFR below 60 for three months or more defines chronic kidney disease.

GFR stays fairly steady even when blood pressure changes, because the kidney adjusts the width of the
small arteries that feed and drain each filter.
"#,
            )
            .with_key_terms(&[
                ("GFR", "Glomerular filtration rate, the volume of plasma filtered per minute."),
                ("eGFR", "An estimate of GFR calculated from a blood test."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Student,
                "GFR equals Kf times the net filtration pressure, which is set by glomerular capillary hydrostatic pressure opposed by Bowman space pressure and plasma oncotic pressure.",
                r#"
GFR = Kf x [(P_GC - P_BS) - (pi_GC - pi_BS)], where pi_BS is normally close to zero.

- Afferent arteriole constriction lowers P_GC, renal plasma flow and GFR.
- Efferent arteriole constriction raises P_GC and GFR while lowering renal plasma flow, so the
  filtration fraction (GFR / RPF, normally about 20%) rises.
- Ureteral obstruction raises P_BS and lowers GFR.

Clearance of inulin measures GFR exactly because inulin is freely filtered and neither reabsorbed nor
secreted. Creatinine clearance slightly overestimates GFR because of tubular secretion.
"#,
            )
            .with_key_terms(&[
                ("Kf", "Filtration coefficient, the product of capillary permeability and surface area."),
                ("Filtration fraction", "GFR divided by renal plasma flow."),
                ("Inulin clearance", "The reference standard for measuring GFR."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Clinician,
                "Hemodynamic drugs shift glomerular pressure: NSAIDs constrict the afferent arteriole and ACE inhibitors or ARBs dilate the efferent arteriole, so their combination with a diuretic can precipitate AKI.",
                r#"
Prostaglandins dilate the afferent arteriole and angiotensin II constricts the efferent arteriole,
together maintaining P_GC when perfusion falls. Blocking both limbs (NSAID plus ACE inhibitor or ARB,
especially with a diuretic) removes this protection.

A creatinine rise of up to 30% after starting an ACE inhibitor or ARB reflects the intended drop in
intraglomerular pressure and is not a reason to stop. A larger rise should prompt evaluation for
renal artery stenosis or volume depletion.

Use CKD-EPI 2021 eGFR for drug dosing and staging; cystatin C improves accuracy at extremes of muscle
mass.
"#,
            )
            .with_key_terms(&[
                ("Triple whammy", "NSAID plus ACE inhibitor or ARB plus diuretic, a common cause of drug-induced AKI."),
                ("Cystatin C", "A filtration marker that does not depend on muscle mass."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Expert,
                "Tubuloglomerular feedback through the macula densa and the myogenic response together autoregulate GFR across mean arterial pressures of roughly 80 to 180 mmHg.",
                r#"
The macula densa senses tubular chloride delivery through NKCC2. Increased delivery triggers ATP and
adenosine release, acting on A1 receptors to constrict the afferent arteriole. SGLT2 inhibitors
increase distal sodium delivery, restore this feedback in diabetic hyperfiltration and cause an early,
reversible dip in eGFR that predicts long-term kidney protection.

Single-nephron hyperfiltration after nephron loss maintains total GFR initially but drives
glomerulosclerosis over time, the basis of the adaptive hyperfiltration theory of CKD progression.
"#,
            )
            .with_key_terms(&[
                ("Macula densa", "Specialized distal tubule cells that sense chloride and signal the afferent arteriole."),
                ("Tubuloglomerular feedback", "Adjustment of single-nephron GFR in response to distal salt delivery."),
                ("Hyperfiltration", "Raised single-nephron GFR that injures remaining glomeruli."),
            ]),
        )
        .with_citation(
            Citation::new(
                "boron-medical-physiology",
                CitationType::Textbook,
                "Medical Physiology",
                &["Boron WF", "Boulpaep EL"],
                "Elsevier",
            )
            .year(2016),
        )
        .with_cross_reference(
            "acute-kidney-injury",
            ContentType::Condition,
            Relationship::Related,
            "Acute kidney injury",
        )
        .with_lifecycle("2024-02-02", "2024-09-30", 2, ContentStatus::Published)
}
