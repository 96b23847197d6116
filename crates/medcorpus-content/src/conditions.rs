//! Condition records.

use medcorpus_core::types::{
    Citation, CitationType, ClinicalRelevance, ComplexityLevel, ContentStatus, ContentTags, ContentType,
    EducationalContent, LevelContent, MediaType, Relationship,
};

pub fn acute_kidney_injury() -> EducationalContent {
    let tags = ContentTags::new(
        &["renal"],
        &["acute-kidney-injury", "nephrology", "critical-care"],
        &["aki", "creatinine", "oliguria", "kdigo", "prerenal", "acute tubular necrosis"],
        ClinicalRelevance::Critical,
    )
    .exam(true, true, &["internal-medicine", "surgery"]);

    EducationalContent::new("acute-kidney-injury", ContentType::Condition, "Acute Kidney Injury", tags)
        .with_name_es("Lesión renal aguda")
        .with_alternate_names(&["AKI", "Acute renal failure", "ARF", "LRA"])
        .with_level(
            LevelContent::new(
                ComplexityLevel::Lay,
                "Acute kidney injury happens when the kidneys suddenly stop working properly, over hours or days.",
                r#"
Your kidneys clean your blood and turn the waste into urine. In acute kidney injury they stop doing
this job well, and it happens quickly, over hours or days rather than years.

There are three main reasons:

- Not enough blood reaches the kidneys, for example after vomiting, diarrhea or heavy bleeding.
- The kidney itself is hurt, for example by some medicines or a severe infection.
- Urine cannot drain out, for example because of a kidney stone or an enlarged prostate.

Warning signs include passing much less urine, swelling of the legs or around the eyes, tiredness,
confusion and shortness of breath. In many people the kidneys recover if the cause is found and
treated early.
"#,
            )
            .with_key_terms(&[
                ("Kidneys", "Two bean-shaped organs that filter waste and extra water out of the blood."),
                ("Urine", "The liquid the kidneys make from waste and extra water."),
                ("Dehydration", "Losing more fluid than you take in."),
            ])
            .with_analogies(&["The kidneys work like a coffee filter: if the filter is blocked or torn, waste stays in the pot."])
            .with_counseling(&[
                "Drink fluids when you have vomiting or diarrhea unless your doctor has told you to limit them.",
                "Ask before taking ibuprofen or naproxen if you have kidney problems.",
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Informed,
                "AKI is a rapid fall in kidney function detected by a rising blood creatinine or a drop in urine output.",
                r#"
Doctors measure kidney function with a blood test called creatinine. Creatinine is a waste product from
muscles that healthy kidneys clear steadily. When it rises quickly, or when urine output falls below about
half a milliliter per kilogram of body weight per hour for several hours, the kidneys are injured.

Causes are grouped by where the problem is:

- Prerenal: low blood flow to the kidneys from dehydration, bleeding, heart failure or sepsis.
- Intrinsic: damage inside the kidney, most often acute tubular necrosis after a long drop in blood
  pressure or exposure to toxic drugs and contrast dye.
- Postrenal: blockage of urine flow anywhere from the kidney to the bladder.

Treatment targets the cause: fluids for dehydration, stopping harmful medicines, relieving a blockage.
Some people need dialysis for a short time while the kidneys heal.
"#,
            )
            .with_key_terms(&[
                ("Creatinine", "A muscle waste product in the blood used to estimate kidney function."),
                ("Prerenal", "Kidney injury caused by reduced blood flow to otherwise healthy kidneys."),
                ("Dialysis", "A treatment that filters the blood when the kidneys cannot."),
            ])
            .with_examples(&["A person with several days of diarrhea whose creatinine doubles and who passes little urine."]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Student,
                "KDIGO defines AKI by a creatinine rise of ≥0.3 mg/dL in 48 h, a rise to ≥1.5 times baseline within 7 days, or urine output <0.5 mL/kg/h for 6 h.",
                r#"
KDIGO staging:

- Stage 1: creatinine 1.5-1.9 times baseline or rise ≥0.3 mg/dL; urine output <0.5 mL/kg/h for 6-12 h.
- Stage 2: creatinine 2.0-2.9 times baseline; urine output <0.5 mL/kg/h for ≥12 h.
- Stage 3: creatinine ≥3 times baseline, creatinine ≥4.0 mg/dL, or renal replacement therapy;
  urine output <0.3 mL/kg/h for ≥24 h or anuria for ≥12 h.

Differentiating prerenal from intrinsic injury: in prerenal states the tubules are intact and avidly
reabsorb sodium, so the fractional excretion of sodium (FENa) is below 1% and the BUN:creatinine ratio
exceeds 20. In acute tubular necrosis FENa is above 2% and the urine sediment shows muddy brown
granular casts. FENa is unreliable after diuretics; use fractional excretion of urea (<35% suggests
prerenal) instead.

Postrenal obstruction is excluded with a bladder scan and renal ultrasound showing hydronephrosis.
"#,
            )
            .with_key_terms(&[
                ("FENa", "Fractional excretion of sodium: (urine Na x plasma Cr) / (plasma Na x urine Cr) x 100."),
                ("Acute tubular necrosis", "Ischemic or toxic injury of tubular epithelium, the commonest intrinsic cause of AKI."),
                ("Muddy brown casts", "Granular casts of sloughed tubular cells typical of acute tubular necrosis."),
                ("KDIGO", "Kidney Disease: Improving Global Outcomes, the group whose criteria define and stage AKI."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Clinician,
                "Manage AKI by restoring perfusion, removing nephrotoxins, relieving obstruction, and treating life-threatening complications that mandate urgent dialysis.",
                r#"
Initial assessment: volume status, medication review (NSAIDs, ACE inhibitors, ARBs, aminoglycosides,
vancomycin, contrast), bladder scan, urinalysis with microscopy, urine sodium and creatinine,
potassium, bicarbonate and renal ultrasound.

Management bundle:

- Balanced crystalloid challenge when hypovolemic; avoid fluid overload once euvolemic.
- Hold nephrotoxins and renally dose all remaining drugs.
- Target mean arterial pressure ≥65 mmHg in shock.
- Place a urinary catheter for bladder outlet obstruction.
- Daily weights, strict input and output, daily creatinine and electrolytes.

Indications for urgent renal replacement therapy (AEIOU): refractory acidosis, refractory
hyperkalemia, ingestion of dialyzable toxins, volume overload unresponsive to diuretics, and
uremic complications such as pericarditis or encephalopathy.
"#,
            )
            .with_key_terms(&[
                ("Nephrotoxin", "A drug or substance that injures the kidney, such as aminoglycosides or iodinated contrast."),
                ("AEIOU", "Mnemonic for urgent dialysis: acidosis, electrolytes, intoxication, overload, uremia."),
                ("Renal replacement therapy", "Hemodialysis, continuous venovenous hemofiltration or peritoneal dialysis."),
            ])
            .with_clinical_notes("Loop diuretics can treat overload but do not change AKI outcomes."),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Expert,
                "AKI is increasingly viewed as a syndrome of heterogeneous subphenotypes, where biomarkers and timing of kidney replacement therapy remain active areas of research.",
                r#"
Creatinine is a late and insensitive marker: it rises only after substantial loss of filtration and
depends on muscle mass and volume of distribution. Tubular stress and injury biomarkers (TIMP-2 x
IGFBP7, NGAL, KIM-1) identify injury earlier and support the concept of subclinical AKI.

Trials of early versus standard or delayed initiation of kidney replacement therapy in critically ill
patients without urgent indications have not shown a mortality benefit for early initiation, and
accelerated strategies increased dialysis dependence in some cohorts. Current practice favors
watchful waiting with close monitoring in the absence of AEIOU indications.

AKI is an independent risk factor for subsequent chronic kidney disease, cardiovascular events and
death. Survivors benefit from nephrology follow-up at about three months with creatinine, eGFR and
albuminuria measurement.
"#,
            )
            .with_key_terms(&[
                ("Subclinical AKI", "Biomarker evidence of tubular injury without a rise in serum creatinine."),
                ("TIMP-2 x IGFBP7", "Cell-cycle arrest biomarker product used to predict moderate to severe AKI."),
                ("AKI to CKD transition", "Maladaptive repair after AKI leading to fibrosis and chronic loss of nephrons."),
            ]),
        )
        .with_media(
            "aki-causes-diagram",
            MediaType::Diagram,
            "aki-prerenal-intrinsic-postrenal.svg",
            "Causes of acute kidney injury",
            "Prerenal, intrinsic and postrenal causes arranged along the path of blood and urine.",
        )
        .with_citation(
            Citation::new(
                "kdigo-aki-2012",
                CitationType::Guideline,
                "KDIGO Clinical Practice Guideline for Acute Kidney Injury",
                &["Kidney Disease: Improving Global Outcomes (KDIGO) Acute Kidney Injury Work Group"],
                "Kidney International Supplements",
            )
            .year(2012),
        )
        .with_citation(
            Citation::new(
                "ronco-aki-lancet-2019",
                CitationType::Article,
                "Acute kidney injury",
                &["Ronco C", "Bellomo R", "Kellum JA"],
                "The Lancet",
            )
            .year(2019),
        )
        .with_cross_reference(
            "glomerular-filtration",
            ContentType::Process,
            Relationship::Related,
            "Glomerular filtration",
        )
        .with_cross_reference(
            "complete-blood-count",
            ContentType::Concept,
            Relationship::SeeAlso,
            "Complete blood count",
        )
        .with_lifecycle("2024-03-11", "2024-11-02", 3, ContentStatus::Published)
        .with_contributors(&["Nephrology editorial board"])
}

pub fn polycystic_ovary_syndrome() -> EducationalContent {
    let tags = ContentTags::new(
        &["reproductive", "endocrine"],
        &["pcos", "gynecology", "infertility"],
        &["hyperandrogenism", "anovulation", "rotterdam criteria", "insulin resistance", "hirsutism"],
        ClinicalRelevance::High,
    )
    .exam(true, true, &["obstetrics-gynecology"]);

    EducationalContent::new("polycystic-ovary-syndrome", ContentType::Condition, "Polycystic Ovary Syndrome", tags)
        .with_name_es("Síndrome de ovario poliquístico")
        .with_alternate_names(&["PCOS", "SOP", "Stein-Leventhal syndrome"])
        .with_level(
            LevelContent::new(
                ComplexityLevel::Lay,
                "PCOS is a common hormone condition that can cause irregular periods, extra hair growth, acne and trouble getting pregnant.",
                r#"
In PCOS the ovaries make more male-type hormones than usual and often do not release an egg every
month. That is why periods can be far apart or missing.

Common signs are irregular periods, hair on the face or chest, acne, thinning scalp hair and
difficulty getting pregnant. Many people with PCOS also have a body that does not respond well to
insulin, which raises the chance of diabetes later in life.

PCOS cannot be cured, but healthy eating, regular activity and medicines control the symptoms well.
"#,
            )
            .with_key_terms(&[
                ("Ovaries", "Two small organs that store eggs and make hormones."),
                ("Hormone", "A chemical messenger carried in the blood."),
                ("Ovulation", "The release of an egg from an ovary."),
            ])
            .with_counseling(&[
                "Irregular periods are worth mentioning to a doctor even if you are not trying to get pregnant.",
                "Losing a small amount of weight, when weight is high, can make periods regular again.",
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Informed,
                "Doctors diagnose PCOS when two of three features are present: irregular ovulation, signs of high androgens, and many small follicles on ultrasound.",
                r#"
The diagnosis uses the Rotterdam criteria. At least two of these must be present, after ruling out
other causes such as thyroid disease or high prolactin:

- Ovulation that is irregular or absent.
- High androgen levels in the blood, or signs of them such as hirsutism or acne.
- Polycystic-appearing ovaries on ultrasound.

Insulin resistance is common and makes the ovaries produce more androgen. Treatment depends on goals:
birth control pills regulate periods and reduce hair growth, metformin helps insulin resistance, and
letrozole helps ovulation when pregnancy is wanted.
"#,
            )
            .with_key_terms(&[
                ("Androgens", "Hormones such as testosterone that are present in everyone but higher in males."),
                ("Hirsutism", "Excess dark hair in a male pattern, such as on the upper lip or chin."),
                ("Insulin resistance", "A state where cells respond poorly to insulin, so the body makes more of it."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Student,
                "PCOS pathophysiology couples increased GnRH pulse frequency and LH-driven theca androgen production with hyperinsulinemia that amplifies ovarian androgen synthesis and lowers SHBG.",
                r#"
Rapid GnRH pulses favor LH over FSH secretion, classically giving an LH:FSH ratio above 2. LH drives
theca cells to produce androstenedione and testosterone, while relatively low FSH limits granulosa
aromatase activity, so follicles arrest at the antral stage and accumulate at the ovarian periphery.

Hyperinsulinemia acts synergistically with LH on theca cells and suppresses hepatic sex
hormone-binding globulin, raising free testosterone.

Unopposed estrogen from chronic anovulation increases the risk of endometrial hyperplasia and
carcinoma, which is why progestin exposure at least every three months is recommended.

Exclude mimics: TSH, prolactin, 17-hydroxyprogesterone for nonclassic congenital adrenal
hyperplasia, and DHEA-S or imaging when virilization suggests a tumor.
"#,
            )
            .with_key_terms(&[
                ("LH:FSH ratio", "Often above 2 in PCOS because fast GnRH pulses favor LH release."),
                ("SHBG", "Sex hormone-binding globulin; lowered by insulin, increasing free androgen."),
                ("Theca cells", "Ovarian cells that make androgens under LH stimulation."),
                ("Endometrial hyperplasia", "Overgrowth of the uterine lining from estrogen without progesterone."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Clinician,
                "Tailor PCOS management to the patient's priorities: cycle control and endometrial protection, hyperandrogenism, fertility, and cardiometabolic risk.",
                r#"
Baseline work-up: total and free testosterone, TSH, prolactin, 17-OHP, pregnancy test, 2-hour 75 g
OGTT or HbA1c, fasting lipids, blood pressure, and screening for depression, anxiety and obstructive
sleep apnea.

Therapy by goal:

- Cycle control and hirsutism: combined oral contraceptive first line; add spironolactone after six
  months if hirsutism persists, always with reliable contraception.
- Metabolic: lifestyle intervention; metformin for impaired glucose tolerance or when the combined
  pill is contraindicated.
- Fertility: letrozole is first-line ovulation induction and gives higher live-birth rates than
  clomiphene. Gonadotropins or IVF follow letrozole resistance.
- Endometrial protection in amenorrhea: cyclic progestin or levonorgestrel IUD.
"#,
            )
            .with_key_terms(&[
                ("Letrozole", "Aromatase inhibitor used first line for ovulation induction in PCOS."),
                ("Spironolactone", "Androgen receptor antagonist used for hirsutism; teratogenic."),
                ("OGTT", "Oral glucose tolerance test, the preferred screen for dysglycemia in PCOS."),
            ])
            .with_clinical_notes("Reassess cardiometabolic risk every one to three years."),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Expert,
                "PCOS is a heritable, polygenic disorder with developmental programming contributions, and the 2023 international guideline refines diagnosis with AMH and adolescent-specific criteria.",
                r#"
Genome-wide association studies implicate loci near DENND1A, LHCGR, FSHR, THADA and INSR, with shared
architecture across diagnostic phenotypes, suggesting the Rotterdam subtypes are not genetically
distinct diseases.

Animal and human data support prenatal androgen exposure and elevated anti-Müllerian hormone as
developmental contributors that reprogram hypothalamic GnRH pulse generation.

The 2023 international evidence-based guideline allows serum AMH as an alternative to ultrasound for
polycystic ovarian morphology in adults, but not in adolescents within eight years of menarche, in
whom both irregular cycles and hyperandrogenism are required.

Long-term sequelae include type 2 diabetes, gestational diabetes, dyslipidemia, endometrial cancer
and mood disorders, independent of body mass index.
"#,
            )
            .with_key_terms(&[
                ("AMH", "Anti-Müllerian hormone from granulosa cells of small follicles, elevated in PCOS."),
                ("DENND1A", "A PCOS susceptibility gene whose splice variant increases theca androgen synthesis."),
                ("Developmental programming", "Lasting physiological change caused by prenatal exposures."),
            ]),
        )
        .with_citation(
            Citation::new(
                "teede-pcos-guideline-2023",
                CitationType::Guideline,
                "Recommendations from the 2023 International Evidence-based Guideline for the Assessment and Management of Polycystic Ovary Syndrome",
                &["Teede HJ", "Tay CT", "Laven JJE"],
                "Journal of Clinical Endocrinology and Metabolism",
            )
            .year(2023),
        )
        .with_cross_reference("fertilization", ContentType::Topic, Relationship::Related, "Fertilization")
        .with_lifecycle("2024-05-20", "2024-10-14", 2, ContentStatus::Published)
        .with_contributors(&["Reproductive endocrinology editorial board"])
}
