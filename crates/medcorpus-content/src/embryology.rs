//! Embryology lessons in the legacy lesson format.

use std::collections::BTreeMap;

use medcorpus_core::types::{ComplexityLevel, Flashcard, LegacyEducationalContent, LegacyLevel, QuizQuestion};

fn card(id: &str, front: &str, back: &str) -> Flashcard {
    Flashcard { id: id.to_string(), front: front.to_string(), back: back.to_string() }
}

fn question(id: &str, question: &str, options: &[&str], correct_answer: usize, explanation: &str) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
        explanation: explanation.to_string(),
    }
}

fn lesson(title: &str, description: &str, content: &str, flashcards: Vec<Flashcard>, quiz: Vec<QuizQuestion>) -> LegacyLevel {
    LegacyLevel {
        title: title.to_string(),
        description: description.to_string(),
        content: content.trim().to_string(),
        flashcards,
        quiz,
    }
}

pub fn fertilization() -> LegacyEducationalContent {
    let mut levels = BTreeMap::new();

    levels.insert(
        ComplexityLevel::Lay,
        lesson(
            "Introduction to Fertilization",
            "How a sperm and an egg unite to start a new life",
            r#"
# Introduction to Fertilization

Fertilization is when a sperm cell and an egg cell join to form a single cell called a **zygote**.
It usually happens in the widest part of the fallopian tube, within a day of the egg being released.

Only a few hundred of the millions of sperm released reach the egg, and only one gets in. As soon as
it does, the egg changes its outer layer so that no other sperm can enter.
"#,
            vec![
                card("f1", "What is fertilization?", "The joining of a sperm and an egg to form a zygote."),
                card("f2", "Where does fertilization usually happen?", "In the ampulla of the fallopian tube."),
            ],
            vec![question(
                "q1",
                "What is the cell formed at fertilization called?",
                &["Blastocyst", "Zygote", "Morula", "Gamete"],
                1,
                "The zygote is the single cell formed when sperm and egg combine.",
            )],
        ),
    );

    levels.insert(
        ComplexityLevel::Informed,
        lesson(
            "Steps of Fertilization",
            "Sperm transport, capacitation and the meeting of the gametes",
            r#"
# Steps of Fertilization

1. **Sperm transport** through the cervix, uterus and tube, helped by uterine contractions.
2. **Capacitation**: in the female tract, sperm lose surface proteins and become able to fertilize.
3. **Penetration** of the corona radiata and the zona pellucida.
4. **Fusion** of sperm and egg membranes.

Sperm can survive up to five days, while the egg survives about 24 hours, which defines the fertile
window.
"#,
            vec![card("f3", "What is capacitation?", "Changes in the female tract that make sperm able to fertilize.")],
            vec![question(
                "q2",
                "How long can sperm survive in the female reproductive tract?",
                &["About 12 hours", "About 24 hours", "Up to 5 days", "Up to 14 days"],
                2,
                "Sperm remain viable for up to five days, which widens the fertile window.",
            )],
        ),
    );

    levels.insert(
        ComplexityLevel::Student,
        lesson(
            "Acrosome Reaction and Blocks to Polyspermy",
            "Molecular events that let one sperm in and keep others out",
            r#"
# Acrosome Reaction and Blocks to Polyspermy

Binding of the capacitated sperm to the zona glycoprotein **ZP3** triggers the **acrosome reaction**,
releasing hyaluronidase and acrosin that digest a path through the zona.

- **Fast block**: membrane depolarization of the oocyte within seconds.
- **Slow block (cortical reaction)**: calcium waves release cortical granule enzymes that modify ZP2
  and ZP3 so no further sperm can bind.

Sperm entry also completes the oocyte's **second meiotic division**, producing the second polar body
and the female pronucleus.
"#,
            vec![
                card("f4", "Which zona protein binds sperm?", "ZP3."),
                card("f5", "What event completes meiosis II?", "Sperm entry into the secondary oocyte."),
            ],
            vec![question(
                "q3",
                "Which process prevents polyspermy by modifying the zona pellucida?",
                &["Capacitation", "Cortical reaction", "Compaction", "Gastrulation"],
                1,
                "Cortical granule exocytosis alters zona proteins so further sperm cannot bind.",
            )],
        ),
    );

    levels.insert(
        ComplexityLevel::Clinician,
        lesson(
            "Fertilization in Clinical Practice",
            "Infertility evaluation and assisted reproduction",
            r#"
# Fertilization in Clinical Practice

Tubal factor infertility and ectopic pregnancy both follow damage to the fallopian tube, most often
from pelvic inflammatory disease.

**In vitro fertilization** bypasses the tube; **intracytoplasmic sperm injection** (ICSI) bypasses
capacitation and zona penetration for severe male factor infertility.

Anovulation, for example in polycystic ovary syndrome, prevents fertilization entirely and is treated
with ovulation induction.
"#,
            vec![card("f6", "When is ICSI indicated?", "Severe male factor infertility or prior fertilization failure.")],
            vec![question(
                "q4",
                "Which technique injects a single sperm directly into the oocyte?",
                &["IUI", "IVF", "ICSI", "GIFT"],
                2,
                "Intracytoplasmic sperm injection places one sperm directly into the oocyte cytoplasm.",
            )],
        ),
    );

    levels.insert(
        ComplexityLevel::Expert,
        lesson(
            "Molecular Biology of Gamete Fusion",
            "Izumo1, Juno and oocyte activation",
            r#"
# Molecular Biology of Gamete Fusion

Sperm **Izumo1** binds oocyte **Juno** (folate receptor 4); Juno is shed from the oolemma after
fusion, contributing to the membrane block. The tetraspanin CD9 organizes the oocyte fusion site.

Oocyte activation is driven by sperm-borne **phospholipase C zeta**, which generates IP3 and calcium
oscillations. PLC zeta deficiency is a cause of fertilization failure after ICSI, and assisted oocyte
activation with calcium ionophores is under evaluation.
"#,
            vec![card("f7", "What is the oocyte receptor for Izumo1?", "Juno (folate receptor 4).")],
            vec![question(
                "q5",
                "Which sperm factor triggers calcium oscillations in the oocyte?",
                &["Acrosin", "Izumo1", "Phospholipase C zeta", "Hyaluronidase"],
                2,
                "PLC zeta generates IP3, which releases calcium from the endoplasmic reticulum.",
            )],
        ),
    );

    LegacyEducationalContent {
        id: "fertilization".to_string(),
        title: "Fertilization".to_string(),
        category: "Embryology".to_string(),
        subcategory: "General Embryology".to_string(),
        description: "The fusion of male and female gametes, marking the beginning of human development".to_string(),
        title_es: Some("Fecundación".to_string()),
        levels,
    }
}
