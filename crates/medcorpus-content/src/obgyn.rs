//! OB/GYN conditions database.
//!
//! Six bilingual condition records covering obstetric, gynecologic and
//! reproductive-endocrine conditions, with lookup helpers over the record set.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use medcorpus_core::registry::{any_contains, Registry};
use medcorpus_core::types::ClinicalRelevance;
use medcorpus_core::{Error, Record};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OBGYNCategory {
    Obstetric,
    Gynecologic,
    ReproductiveEndocrine,
    Oncologic,
    Urogynecologic,
}

impl OBGYNCategory {
    pub const ALL: [OBGYNCategory; 5] = [
        OBGYNCategory::Obstetric,
        OBGYNCategory::Gynecologic,
        OBGYNCategory::ReproductiveEndocrine,
        OBGYNCategory::Oncologic,
        OBGYNCategory::Urogynecologic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OBGYNCategory::Obstetric => "obstetric",
            OBGYNCategory::Gynecologic => "gynecologic",
            OBGYNCategory::ReproductiveEndocrine => "reproductive-endocrine",
            OBGYNCategory::Oncologic => "oncologic",
            OBGYNCategory::Urogynecologic => "urogynecologic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OBGYNCategory::Obstetric => "Obstetric",
            OBGYNCategory::Gynecologic => "Gynecologic",
            OBGYNCategory::ReproductiveEndocrine => "Reproductive Endocrinology",
            OBGYNCategory::Oncologic => "Gynecologic Oncology",
            OBGYNCategory::Urogynecologic => "Urogynecology",
        }
    }

    pub fn label_es(self) -> &'static str {
        match self {
            OBGYNCategory::Obstetric => "Obstétrica",
            OBGYNCategory::Gynecologic => "Ginecológica",
            OBGYNCategory::ReproductiveEndocrine => "Endocrinología reproductiva",
            OBGYNCategory::Oncologic => "Oncología ginecológica",
            OBGYNCategory::Urogynecologic => "Uroginecología",
        }
    }
}

impl fmt::Display for OBGYNCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OBGYNCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OBGYNCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::NotFound(format!("OB/GYN category '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub initial: Vec<String>,
    pub confirmatory: Vec<String>,
    pub monitoring: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub first_line: String,
    pub medications: Vec<String>,
    pub procedures: Vec<String>,
    pub lifestyle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OBGYNConditionEntry {
    pub id: String,
    pub name: String,
    pub name_es: String,
    pub category: OBGYNCategory,
    pub icd11: String,
    pub description: String,
    pub description_es: String,
    pub risk_factors: Vec<String>,
    pub symptoms: Vec<String>,
    pub diagnostics: Diagnostics,
    pub treatment: Treatment,
    pub emergency_signs: Vec<String>,
    pub patient_explanation: String,
    pub patient_explanation_es: String,
}

impl Record for OBGYNConditionEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.name.as_str(),
            self.name_es.as_str(),
            self.category.as_str(),
            self.description.as_str(),
            self.description_es.as_str(),
            self.patient_explanation.as_str(),
            self.patient_explanation_es.as_str(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Compact helpers
// ---------------------------------------------------------------------------

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn dx(initial: &[&str], confirmatory: &[&str], monitoring: &[&str]) -> Diagnostics {
    Diagnostics { initial: strings(initial), confirmatory: strings(confirmatory), monitoring: strings(monitoring) }
}

fn tx(first_line: &str, medications: &[&str], procedures: &[&str], lifestyle: &str) -> Treatment {
    Treatment {
        first_line: first_line.to_string(),
        medications: strings(medications),
        procedures: strings(procedures),
        lifestyle: lifestyle.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn obgyn(
    id: &str, name: &str, name_es: &str, category: OBGYNCategory, icd11: &str,
    description: &str, description_es: &str,
    risk_factors: &[&str], symptoms: &[&str],
    diagnostics: Diagnostics, treatment: Treatment,
    emergency_signs: &[&str],
    patient_explanation: &str, patient_explanation_es: &str,
) -> OBGYNConditionEntry {
    OBGYNConditionEntry {
        id: id.to_string(),
        name: name.to_string(),
        name_es: name_es.to_string(),
        category,
        icd11: icd11.to_string(),
        description: description.to_string(),
        description_es: description_es.to_string(),
        risk_factors: strings(risk_factors),
        symptoms: strings(symptoms),
        diagnostics,
        treatment,
        emergency_signs: strings(emergency_signs),
        patient_explanation: patient_explanation.to_string(),
        patient_explanation_es: patient_explanation_es.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Database
// ---------------------------------------------------------------------------

pub static OBGYN_CONDITIONS: Lazy<Registry<OBGYNConditionEntry>> = Lazy::new(|| Registry::from_entries(entries()));

fn entries() -> Vec<OBGYNConditionEntry> {
    use OBGYNCategory::*;
    vec![

        // ---- Obstetric (3) ---------------------------------------------------

        obgyn(
            "preeclampsia", "Preeclampsia", "Preeclampsia", Obstetric, "JA24",
            "Hypertensive disorder of pregnancy after 20 weeks with proteinuria or end-organ dysfunction, a leading cause of maternal and perinatal morbidity.",
            "Trastorno hipertensivo del embarazo después de las 20 semanas con proteinuria o disfunción de órganos, una causa principal de morbilidad materna y perinatal.",
            &["Nulliparity", "Prior preeclampsia", "Chronic hypertension", "Pregestational diabetes", "Obesity (BMI ≥30 kg/m²)", "Multiple gestation", "Chronic kidney disease", "Antiphospholipid syndrome", "Maternal age >35"],
            &["Blood pressure ≥140/90 on two occasions 4 hours apart", "Proteinuria ≥300 mg/24 h or protein/creatinine ratio ≥0.3", "Severe headache", "Visual disturbances", "Right upper quadrant or epigastric pain", "Sudden swelling of face or hands"],
            dx(
                &["Serial blood pressure measurement", "Urine protein/creatinine ratio"],
                &["CBC with platelets", "AST, ALT, creatinine", "24-hour urine protein when ratio is borderline"],
                &["Twice-weekly labs when managed expectantly", "NST/BPP and growth ultrasound"],
            ),
            tx(
                "Delivery is definitive: at 37 weeks without severe features; after maternal stabilization from 34 weeks with severe features.",
                &["Labetalol or nifedipine for severe-range blood pressure", "Magnesium sulfate for seizure prophylaxis", "Betamethasone before 34 weeks", "Low-dose aspirin 81 mg from 12-16 weeks in high-risk pregnancies"],
                &["Induction of labor", "Cesarean delivery for obstetric indications"],
                "Home blood pressure checks, daily fetal movement counts, prompt reporting of warning symptoms.",
            ),
            &["BP ≥160/110", "Seizure", "Severe headache unrelieved by acetaminophen", "Sudden vision loss", "Shortness of breath"],
            "Preeclampsia is high blood pressure in pregnancy that also affects organs such as the kidneys and liver. It starts with the placenta and only fully resolves after the baby and placenta are delivered, so your team will watch you and your baby closely and plan the safest time for birth.",
            "La preeclampsia es presión alta en el embarazo que también afecta órganos como los riñones y el hígado. Comienza en la placenta y solo se resuelve por completo después del parto, por lo que su equipo la vigilará de cerca y planificará el momento más seguro para el nacimiento.",
        ),

        obgyn(
            "gestational-diabetes", "Gestational Diabetes Mellitus", "Diabetes mellitus gestacional", Obstetric, "JA63",
            "Glucose intolerance first recognized in the second or third trimester, driven by placental hormones that raise insulin resistance.",
            "Intolerancia a la glucosa reconocida por primera vez en el segundo o tercer trimestre, causada por hormonas placentarias que aumentan la resistencia a la insulina.",
            &["Pre-pregnancy BMI ≥30 kg/m²", "Prior gestational diabetes", "First-degree relative with type 2 diabetes", "Prior infant weighing >4000 g", "Age >25", "High-risk ethnicity"],
            &["Usually no symptoms; found on screening", "Increased thirst", "Frequent urination", "Fundal height larger than expected"],
            dx(
                &["50 g glucose challenge test at 24-28 weeks"],
                &["100 g 3-hour oral glucose tolerance test", "75 g 2-hour oral glucose tolerance test (one-step approach)"],
                &["Self-monitored glucose four times daily", "Growth ultrasound in the third trimester", "75 g OGTT at 4-12 weeks postpartum"],
            ),
            tx(
                "Medical nutrition therapy and exercise; add insulin when fasting glucose stays ≥95 mg/dL or 1-hour postprandial ≥140 mg/dL.",
                &["Insulin (preferred)", "Metformin in selected patients"],
                &["Induction at 39-40 weeks when well controlled", "Cesarean delivery if estimated fetal weight >4500 g"],
                "Consistent carbohydrate intake over three meals and two to three snacks, 30 minutes of walking most days.",
            ),
            &["Glucose >200 mg/dL with symptoms", "Vomiting with inability to eat", "Decreased fetal movement"],
            "Gestational diabetes means pregnancy hormones make it harder for your insulin to work. Keeping blood sugar in range with food choices, activity and sometimes insulin keeps your baby from growing too large. It usually goes away after birth, but you should be tested again afterwards.",
            "La diabetes gestacional significa que las hormonas del embarazo dificultan el trabajo de la insulina. Mantener el azúcar en rango con la alimentación, la actividad y a veces insulina evita que el bebé crezca demasiado. Suele desaparecer después del parto, pero debe volver a hacerse pruebas.",
        ),

        obgyn(
            "ectopic-pregnancy", "Ectopic Pregnancy", "Embarazo ectópico", Obstetric, "JA01",
            "Implantation outside the uterine cavity, most often in the fallopian tube; rupture causes life-threatening intra-abdominal bleeding.",
            "Implantación fuera de la cavidad uterina, casi siempre en la trompa de Falopio; la ruptura causa sangrado intraabdominal que pone en riesgo la vida.",
            &["Prior ectopic pregnancy", "Pelvic inflammatory disease", "Prior tubal surgery", "Pregnancy with an IUD in place", "Assisted reproduction", "Smoking"],
            &["Unilateral pelvic pain", "Vaginal bleeding after a missed period", "Shoulder-tip pain", "Dizziness or fainting"],
            dx(
                &["Quantitative beta-hCG", "Transvaginal ultrasound"],
                &["No intrauterine pregnancy with hCG above the discriminatory zone", "Adnexal mass on ultrasound"],
                &["Serial hCG until negative after methotrexate"],
            ),
            tx(
                "Methotrexate for stable, unruptured cases meeting criteria; surgery for rupture or instability.",
                &["Methotrexate (single- or multi-dose protocol)", "Anti-D immunoglobulin if Rh-negative"],
                &["Laparoscopic salpingostomy", "Laparoscopic salpingectomy", "Emergency laparotomy if unstable"],
                "Avoid alcohol, folic acid supplements and strenuous activity during methotrexate treatment.",
            ),
            &["Sudden severe abdominal pain", "Fainting", "Shoulder-tip pain", "Heavy vaginal bleeding"],
            "In an ectopic pregnancy the pregnancy grows outside the womb, usually in a tube, where it cannot survive. Treating it early with medicine or surgery protects your health and future fertility.",
            "En un embarazo ectópico el embarazo crece fuera del útero, casi siempre en una trompa, donde no puede sobrevivir. Tratarlo a tiempo con medicamento o cirugía protege su salud y su fertilidad futura.",
        ),

        // ---- Reproductive-endocrine (1) ----------------------------------------

        obgyn(
            "pcos", "Polycystic Ovary Syndrome", "Síndrome de ovario poliquístico", ReproductiveEndocrine, "5A80.1",
            "Common endocrine disorder of reproductive age defined by two of three Rotterdam criteria: ovulatory dysfunction, hyperandrogenism, and polycystic ovarian morphology.",
            "Trastorno endocrino frecuente en la edad reproductiva definido por dos de tres criterios de Rotterdam: disfunción ovulatoria, hiperandrogenismo y morfología ovárica poliquística.",
            &["Obesity and insulin resistance", "Family history of PCOS", "Family history of type 2 diabetes", "Premature adrenarche"],
            &["Irregular or absent periods", "Hirsutism", "Acne", "Scalp hair thinning", "Difficulty conceiving", "Acanthosis nigricans"],
            dx(
                &["Menstrual history", "Total and free testosterone", "TSH, prolactin, 17-hydroxyprogesterone to exclude mimics"],
                &["Pelvic ultrasound (≥20 follicles per ovary)", "Anti-Müllerian hormone in adults"],
                &["2-hour OGTT or HbA1c", "Fasting lipid panel", "Depression and sleep apnea screening"],
            ),
            tx(
                "Lifestyle change first; combined oral contraceptives for cycle control and androgen symptoms; ovulation induction when pregnancy is desired.",
                &["Combined oral contraceptives", "Metformin", "Spironolactone with reliable contraception", "Letrozole for ovulation induction"],
                &["Laparoscopic ovarian drilling for letrozole-resistant anovulation"],
                "A 5-10% weight reduction when BMI is elevated often restores ovulation; regular resistance and aerobic exercise.",
            ),
            &["Heavy bleeding after months without a period", "Severe pelvic pain during ovulation induction"],
            "PCOS is a hormone imbalance that can cause irregular periods, extra hair growth and trouble getting pregnant. It is lifelong but very manageable, and treatment also protects against diabetes and heart disease later.",
            "El SOP es un desequilibrio hormonal que puede causar periodos irregulares, exceso de vello y dificultad para embarazarse. Dura toda la vida pero es muy controlable, y el tratamiento también protege contra la diabetes y las enfermedades del corazón.",
        ),

        // ---- Gynecologic (2) ---------------------------------------------------

        obgyn(
            "endometriosis", "Endometriosis", "Endometriosis", Gynecologic, "GA10",
            "Endometrial-like tissue outside the uterus causing cyclical pelvic pain, dysmenorrhea, dyspareunia, and infertility.",
            "Tejido similar al endometrio fuera del útero que causa dolor pélvico cíclico, dismenorrea, dispareunia e infertilidad.",
            &["Early menarche", "Short menstrual cycles", "Heavy or prolonged menses", "Low body mass index", "Family history of endometriosis", "Müllerian anomalies with outflow obstruction"],
            &["Painful periods worsening over time", "Pain with intercourse", "Painful bowel movements or urination during menses", "Chronic pelvic pain", "Infertility"],
            dx(
                &["Clinical history and pelvic exam", "Transvaginal ultrasound for endometriomas"],
                &["MRI for deep infiltrating disease", "Laparoscopy with histology"],
                &["Symptom diary", "Repeat ultrasound for endometrioma growth"],
            ),
            tx(
                "NSAIDs plus hormonal suppression first; surgical excision when pain persists or fertility is affected.",
                &["NSAIDs", "Continuous combined oral contraceptives", "Progestins (dienogest, norethindrone)", "GnRH antagonists with add-back therapy"],
                &["Laparoscopic excision or ablation", "Cystectomy for endometrioma", "Hysterectomy for refractory disease"],
                "Heat, pelvic floor physiotherapy and regular exercise alongside medical treatment.",
            ),
            &["Sudden severe pelvic pain", "Fever with pelvic pain", "Inability to pass urine or stool"],
            "Endometriosis happens when tissue like the lining of the womb grows elsewhere in the pelvis and bleeds with each cycle, causing pain and scarring. Hormone treatment calms it down and surgery can remove it.",
            "La endometriosis ocurre cuando un tejido parecido al revestimiento del útero crece en otras partes de la pelvis y sangra en cada ciclo, causando dolor y cicatrices. El tratamiento hormonal la controla y la cirugía puede extirparla.",
        ),

        obgyn(
            "uterine-fibroids", "Uterine Fibroids", "Miomas uterinos", Gynecologic, "2E86.0",
            "Benign smooth-muscle tumors of the uterus and the most common pelvic tumor, often causing heavy menstrual bleeding and pressure symptoms.",
            "Tumores benignos de músculo liso del útero y el tumor pélvico más frecuente, que a menudo causan sangrado menstrual abundante y síntomas de presión.",
            &["Increasing age until menopause", "Black race", "Early menarche", "Higher body mass index", "Family history of fibroids", "Vitamin D deficiency"],
            &["Heavy or prolonged periods", "Pelvic pressure", "Urinary frequency", "Constipation", "Enlarged irregular uterus"],
            dx(
                &["Pelvic exam", "Pelvic ultrasound", "CBC for anemia"],
                &["Saline infusion sonography or hysteroscopy for submucosal fibroids", "MRI for surgical planning"],
                &["Ultrasound every 6-12 months when managed expectantly", "Hemoglobin and ferritin"],
            ),
            tx(
                "Observation when asymptomatic; medical therapy for bleeding; procedures according to size, symptoms and fertility goals.",
                &["Tranexamic acid", "Levonorgestrel IUD", "Relugolix combination therapy", "Oral iron"],
                &["Hysteroscopic myomectomy", "Laparoscopic or open myomectomy", "Uterine artery embolization", "Hysterectomy"],
                "Track bleeding with pad counts and keep iron stores up with diet and supplements.",
            ),
            &["Soaking a pad every hour for several hours", "Severe pelvic pain with fever", "Inability to urinate"],
            "Fibroids are non-cancerous growths in the muscle of the womb. Many cause no trouble; when they cause heavy periods or pressure there are medicines and procedures, including options that keep the womb.",
            "Los miomas son crecimientos no cancerosos en el músculo del útero. Muchos no causan problemas; cuando provocan periodos abundantes o presión existen medicamentos y procedimientos, incluidas opciones que conservan el útero.",
        ),
    ]
}

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLabel {
    pub id: OBGYNCategory,
    pub label: &'static str,
    pub label_es: &'static str,
}

pub static OBGYN_CATEGORIES: Lazy<Vec<CategoryLabel>> = Lazy::new(|| {
    OBGYNCategory::ALL
        .into_iter()
        .map(|id| CategoryLabel { id, label: id.label(), label_es: id.label_es() })
        .collect()
});

/// How urgently a clinician should think of each condition when it is on the differential.
pub static OBGYN_CLINICAL_PRIORITY: Lazy<HashMap<&'static str, ClinicalRelevance>> = Lazy::new(|| {
    HashMap::from([
        ("preeclampsia", ClinicalRelevance::Critical),
        ("ectopic-pregnancy", ClinicalRelevance::Critical),
        ("gestational-diabetes", ClinicalRelevance::High),
        ("pcos", ClinicalRelevance::Medium),
        ("endometriosis", ClinicalRelevance::Medium),
        ("uterine-fibroids", ClinicalRelevance::Medium),
    ])
});

pub fn clinical_priority(id: &str) -> Option<ClinicalRelevance> {
    OBGYN_CLINICAL_PRIORITY.get(id).copied()
}

// ---------------------------------------------------------------------------
// Utility functions
// ---------------------------------------------------------------------------

/// Get a single condition by id.
pub fn get_obgyn_condition_by_id(id: &str) -> Option<&'static OBGYNConditionEntry> {
    OBGYN_CONDITIONS.get(id)
}

/// Case-insensitive search over id, names, category, descriptions and patient explanations.
pub fn search_obgyn_conditions(query: &str) -> Vec<&'static OBGYNConditionEntry> {
    OBGYN_CONDITIONS.search(query)
}

pub fn get_obgyn_by_category(category: OBGYNCategory) -> Vec<&'static OBGYNConditionEntry> {
    OBGYN_CONDITIONS.filter(|c| c.category == category)
}

pub fn get_obgyn_condition_count() -> usize {
    OBGYN_CONDITIONS.count()
}

/// Conditions with at least one risk factor containing `risk_factor` (case-insensitive).
pub fn get_obgyn_by_risk_factor(risk_factor: &str) -> Vec<&'static OBGYNConditionEntry> {
    OBGYN_CONDITIONS.filter(|c| any_contains(&c.risk_factors, risk_factor))
}
