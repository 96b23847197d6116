use medcorpus_content::index::built_in_content;
use medcorpus_core::traits::TextIndexer;
use medcorpus_core::types::ComplexityLevel;
use medcorpus_text::{CorpusIndexer, CorpusSearchEngine};

#[test]
fn tantivy_full_flow() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let index_dir = tmp.path().join("indexes/tantivy");
    let contents = built_in_content();
    let expected_docs: usize = contents.iter().map(|c| c.levels.len()).sum();

    let indexer = CorpusIndexer::new(index_dir.clone()).expect("indexer");
    let count = indexer.index_content(&contents).expect("index content");
    eprintln!("Tantivy: indexed {} level documents into {}", count, index_dir.display());
    assert_eq!(count, expected_docs);

    let engine = CorpusSearchEngine::new(index_dir).expect("engine");
    for q in ["creatinine", "hemoglobin", "consent"] {
        let results = engine.search(q, 10).expect("search");
        eprintln!("q='{}' -> {} hits", q, results.len());
        assert!(!results.is_empty(), "no hits for {}", q);
        for pair in results.windows(2) { assert!(pair[0].score >= pair[1].score); }
    }

    let results = engine.search("creatinine", 10).expect("search");
    assert!(results.iter().any(|r| r.content_id == "acute-kidney-injury"));
    assert!(results.iter().all(|r| r.id == format!("{}:{}", r.content_id, r.level)));
}

#[test]
fn reindex_replaces_existing_directory() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let index_dir = tmp.path().join("tantivy");
    let contents = built_in_content();

    CorpusIndexer::new(index_dir.clone()).unwrap().index_content(&contents).unwrap();
    let second = CorpusIndexer::new(index_dir.clone()).unwrap();
    second.index_content(&contents[..1]).unwrap();

    let engine = CorpusSearchEngine::new(index_dir).unwrap();
    let results = engine.search("creatinine", 50).unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.content_id == contents[0].id));
    assert!(engine.search("hemoglobin", 50).unwrap().is_empty());
}

#[test]
fn level_filter_and_facets() {
    let indexer = CorpusIndexer::in_memory().unwrap();
    indexer.index_content(&built_in_content()).unwrap();
    let engine = CorpusSearchEngine::from_index(indexer.tantivy_index().clone()).unwrap();

    let results = engine.search_level("kidney", ComplexityLevel::Student, 20).unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.level == 3));

    let facets = engine.get_facet_counts("kidney").unwrap();
    let names: Vec<&str> = facets.iter().map(|(f, _)| f.as_str()).collect();
    assert!(names.contains(&"/condition"), "{:?}", names);
    assert!(names.contains(&"/condition/renal"), "{:?}", names);
    assert!(facets.iter().all(|(_, count)| *count > 0));
}

#[test]
fn trait_search_returns_level_hits() {
    let indexer = CorpusIndexer::in_memory().unwrap();
    indexer.index_content(&built_in_content()).unwrap();

    let hits = TextIndexer::search(&indexer, "ovulation", 5).unwrap();
    assert!(!hits.is_empty());
    assert!(hits.len() <= 5);
    for hit in &hits {
        assert_eq!(hit.id, format!("{}:{}", hit.content_id, hit.level));
    }
    assert!(hits.iter().any(|h| h.content_id == "polycystic-ovary-syndrome"));
}

#[test]
fn stop_words_alone_match_nothing() {
    let indexer = CorpusIndexer::in_memory().unwrap();
    indexer.index_content(&built_in_content()).unwrap();
    let engine = CorpusSearchEngine::from_index(indexer.tantivy_index().clone()).unwrap();
    assert!(engine.search("the", 10).unwrap().is_empty());
}
