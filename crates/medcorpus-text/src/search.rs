use anyhow::Result;
use tantivy::{Index, collector::{FacetCollector, TopDocs}, query::{BooleanQuery, Occur, Query, QueryParser, TermQuery}, TantivyDocument, Term};
use tantivy::schema::{Facet, Field, IndexRecordOption, Value};
use tantivy::snippet::SnippetGenerator;

use medcorpus_core::types::ComplexityLevel;

use crate::tantivy_utils::{register_tokenizer, CorpusFields};

pub struct CorpusSearchEngine {
	index: Index,
	searcher: tantivy::Searcher,
	fields: CorpusFields,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
	pub score: f32,
	pub id: String,
	pub content_id: String,
	pub level: u8,
	pub name: String,
	pub category: String,
	pub snippet: String,
}

impl CorpusSearchEngine {
	pub fn new(index_dir: std::path::PathBuf) -> Result<Self, anyhow::Error> {
		let index = Index::open_in_dir(&index_dir)?;
		Self::from_index(index)
	}

	/// Wraps an already-open index, e.g. one built with `CorpusIndexer::in_memory`.
	pub fn from_index(index: Index) -> Result<Self, anyhow::Error> {
		register_tokenizer(&index);
		let reader = index.reader()?; let searcher = reader.searcher();
		let fields = CorpusFields::from_schema(&index.schema())?;
		Ok(Self { index, searcher, fields })
	}

	fn parse(&self, query_text: &str) -> Result<Box<dyn Query>, anyhow::Error> {
		let query_parser = QueryParser::for_index(&self.index, self.fields.default_search_fields());
		Ok(query_parser.parse_query(query_text)?)
	}

	pub fn search(&self, query_text: &str, limit: usize) -> Result<Vec<SearchResult>, anyhow::Error> {
		let query = self.parse(query_text)?;
		self.collect(query, limit)
	}

	/// Same as [`search`](Self::search), restricted to documents of one level.
	pub fn search_level(&self, query_text: &str, level: ComplexityLevel, limit: usize) -> Result<Vec<SearchResult>, anyhow::Error> {
		let text_query = self.parse(query_text)?;
		let level_term = Term::from_field_u64(self.fields.level, u64::from(level.as_u8()));
		let level_query: Box<dyn Query> = Box::new(TermQuery::new(level_term, IndexRecordOption::Basic));
		let query: Box<dyn Query> = Box::new(BooleanQuery::new(vec![(Occur::Must, text_query), (Occur::Must, level_query)]));
		self.collect(query, limit)
	}

	fn collect(&self, query: Box<dyn Query>, limit: usize) -> Result<Vec<SearchResult>, anyhow::Error> {
		let top_docs = self.searcher.search(&query, &TopDocs::with_limit(limit))?;
		let snippet_generator = SnippetGenerator::create(&self.searcher, &query, self.fields.text)?;
		let mut results = Vec::new();
		for (score, doc_address) in top_docs {
			let doc: TantivyDocument = self.searcher.doc(doc_address)?;
			let text_of = |field: Field| doc.get_first(field).and_then(|v| v.as_str()).unwrap_or("").to_string();
			let level = doc.get_first(self.fields.level).and_then(|v| v.as_u64()).unwrap_or(0);
			let snippet = snippet_generator.snippet_from_doc(&doc);
			results.push(SearchResult {
				score,
				id: text_of(self.fields.id),
				content_id: text_of(self.fields.content_id),
				level: u8::try_from(level)?,
				name: text_of(self.fields.name),
				category: text_of(self.fields.category_text),
				snippet: snippet.to_html(),
			});
		}
		Ok(results)
	}

	/// Hit counts per content type (`/condition`) and per type and system (`/condition/renal`).
	pub fn get_facet_counts(&self, query_text: &str) -> Result<Vec<(String, u64)>, anyhow::Error> {
		let query = self.parse(query_text)?;
		let mut facet_collector = FacetCollector::for_field("category");
		facet_collector.add_facet(Facet::root());
		let top_counts = self.searcher.search(&query, &facet_collector)?;
		let types: Vec<(Facet, u64)> = top_counts.get(Facet::root()).map(|(facet, count)| (facet.clone(), count)).collect();
		if types.is_empty() {
			return Ok(Vec::new());
		}

		// Sibling facets only: the collector rejects a facet alongside its own ancestor.
		let mut system_collector = FacetCollector::for_field("category");
		for (facet, _) in &types { system_collector.add_facet(facet.clone()); }
		let system_counts = self.searcher.search(&query, &system_collector)?;

		let mut facets = Vec::new();
		for (facet, count) in &types {
			facets.push((facet.to_string(), *count));
			for (child, child_count) in system_counts.get(facet.clone()) { facets.push((child.to_string(), child_count)); }
		}
		Ok(facets)
	}
}
