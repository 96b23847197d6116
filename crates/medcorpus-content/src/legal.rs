//! Legal and ethical aspects of medicine.

use medcorpus_core::types::{
    Citation, CitationType, ClinicalRelevance, ComplexityLevel, ContentStatus, ContentTags, ContentType,
    EducationalContent, LevelContent,
};

pub fn informed_consent() -> EducationalContent {
    let tags = ContentTags::new(
        &["medical-law"],
        &["ethics", "patient-rights"],
        &["consent", "capacity", "autonomy", "disclosure", "shared decision-making"],
        ClinicalRelevance::High,
    )
    .exam(true, true, &[]);

    EducationalContent::new("informed-consent", ContentType::Concept, "Informed Consent", tags)
        .with_name_es("Consentimiento informado")
        .with_alternate_names(&["Consent to treatment"])
        .with_level(
            LevelContent::new(
                ComplexityLevel::Lay,
                "Informed consent means you agree to a test or treatment after it has been explained to you in a way you understand.",
                r#"
Before a procedure your care team should tell you what it is, why it is recommended, what could go
wrong, and what other choices you have, including doing nothing.

You can ask questions, take time to decide, and change your mind. Signing a form is only part of
consent; the conversation is what matters.
"#,
            )
            .with_key_terms(&[
                ("Consent", "Permission you give for something to be done to you."),
                ("Risk", "The chance that something unwanted could happen."),
            ])
            .with_counseling(&["Ask for an interpreter if you are not comfortable in the language being used."]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Informed,
                "Valid consent needs a person with decision-making capacity who receives adequate information and decides voluntarily.",
                r#"
Three elements must be present:

- Capacity: the person can understand, remember and weigh the information and communicate a choice.
- Information: the nature of the intervention, its benefits, material risks and reasonable
  alternatives.
- Voluntariness: the decision is free of pressure or coercion.

Emergencies are an exception: when a person cannot consent and delay would cause serious harm,
clinicians may provide treatment that a reasonable person would want.
"#,
            )
            .with_key_terms(&[
                ("Capacity", "The ability to make a particular decision at a particular time."),
                ("Voluntariness", "Making a choice without coercion or undue influence."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Student,
                "Capacity is decision-specific and assessed by the treating clinician; competence is a legal determination made by a court.",
                r#"
Capacity assessment checks four abilities: understanding the relevant information, appreciating how
it applies to oneself, reasoning about options, and expressing a consistent choice.

Disclosure standards differ between jurisdictions: the professional standard asks what a reasonable
physician would disclose; the reasonable patient standard asks what a reasonable person in the
patient's position would want to know.

Minors generally need parental consent, with exceptions for emancipated minors, mature minors in some
jurisdictions, and specific services such as contraception, prenatal care and treatment of sexually
transmitted infections.
"#,
            )
            .with_key_terms(&[
                ("Competence", "A legal status decided by a court."),
                ("Reasonable patient standard", "Disclosure of what a reasonable patient would consider material."),
                ("Emancipated minor", "A person under the age of majority who is legally treated as an adult."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Clinician,
                "Document the consent discussion, use teach-back and professional interpreters, and involve surrogates in the legal order of priority when capacity is lacking.",
                r#"
Good practice:

- Document the diagnosis, proposed procedure, material risks with approximate frequencies,
  alternatives, questions asked and the patient's decision.
- Use teach-back to confirm understanding.
- Use qualified medical interpreters rather than family members.

When capacity is lacking, follow an advance directive if one applies, then a designated healthcare
proxy, then surrogates in the statutory order. Surrogates apply substituted judgment, or best
interests when the patient's wishes are unknown.

Informed refusal deserves the same documentation as consent, including the consequences explained.
"#,
            )
            .with_key_terms(&[
                ("Teach-back", "Asking the patient to explain the information in their own words."),
                ("Substituted judgment", "A surrogate decides as the patient would have decided."),
                ("Informed refusal", "A capable patient's documented decision to decline a recommended intervention."),
            ]),
        )
        .with_level(
            LevelContent::new(
                ComplexityLevel::Expert,
                "Landmark cases moved consent law from physician-centered to patient-centered disclosure, and current scholarship emphasizes shared decision-making over a signature-based model.",
                r#"
Schloendorff v. Society of New York Hospital (1914) established the right to determine what is done
with one's body. Canterbury v. Spence (1972) introduced the reasonable patient standard in the United
States, and Montgomery v. Lanarkshire Health Board (2015) adopted a materiality test in the United
Kingdom that includes risks a particular patient would attach significance to.

Empirical work shows poor recall of disclosed risks, which supports decision aids and iterative
conversations over single-encounter form signing. Research consent adds further requirements under
the Common Rule and ethics committee oversight.
"#,
            )
            .with_key_terms(&[
                ("Materiality", "Whether a reasonable person, or this patient, would attach significance to a risk."),
                ("Decision aid", "A tool that presents options and outcomes to support shared decisions."),
            ]),
        )
        .with_citation(
            Citation::new(
                "appelbaum-capacity-nejm-2007",
                CitationType::Article,
                "Assessment of patients' competence to consent to treatment",
                &["Appelbaum PS"],
                "New England Journal of Medicine",
            )
            .year(2007),
        )
        .with_citation(Citation::new(
            "montgomery-2015",
            CitationType::Website,
            "Montgomery v Lanarkshire Health Board [2015] UKSC 11",
            &[],
            "The Supreme Court of the United Kingdom",
        ))
        .with_lifecycle("2024-04-08", "2024-04-08", 1, ContentStatus::Review)
}
