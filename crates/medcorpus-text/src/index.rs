use anyhow::Result;
use std::path::PathBuf;
use tantivy::{doc, Index, TantivyDocument};
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::{Facet, Value};
use tracing::{debug, info};

use medcorpus_core::loader::level_documents;
use medcorpus_core::traits::TextIndexer;
use medcorpus_core::types::{ComplexityLevel, EducationalContent, LevelDocument, SearchHit};

use crate::tantivy_utils::{build_schema, register_tokenizer, CorpusFields};

const WRITER_HEAP_BYTES: usize = 50_000_000;

pub struct CorpusIndexer {
	index: Index,
	fields: CorpusFields,
}

impl CorpusIndexer {
	/// Creates an on-disk index, replacing anything already in `index_dir`.
	pub fn new(index_dir: PathBuf) -> Result<Self, anyhow::Error> {
		let schema = build_schema();
		if index_dir.exists() { std::fs::remove_dir_all(&index_dir)?; }
		std::fs::create_dir_all(&index_dir)?;
		let index = Index::create_in_dir(&index_dir, schema.clone())?;
		register_tokenizer(&index);
		let fields = CorpusFields::from_schema(&schema)?;
		info!(dir = %index_dir.display(), "created text index");
		Ok(Self { index, fields })
	}

	pub fn in_memory() -> Result<Self, anyhow::Error> {
		let schema = build_schema();
		let index = Index::create_in_ram(schema.clone());
		register_tokenizer(&index);
		let fields = CorpusFields::from_schema(&schema)?;
		Ok(Self { index, fields })
	}

	pub fn tantivy_index(&self) -> &Index {
		&self.index
	}

	/// Flattens each record into per-level documents and indexes them in one commit.
	pub fn index_content(&self, contents: &[EducationalContent]) -> Result<usize, anyhow::Error> {
		let docs: Vec<LevelDocument> = contents.iter().flat_map(level_documents).collect();
		self.index(&docs)?;
		info!(records = contents.len(), documents = docs.len(), "indexed content");
		Ok(docs.len())
	}
}

impl TextIndexer for CorpusIndexer {
	fn index(&self, docs: &[LevelDocument]) -> anyhow::Result<()> {
		let mut index_writer = self.index.writer(WRITER_HEAP_BYTES)?;
		for d in docs {
			let doc = doc!(
				self.fields.id => d.id.clone(),
				self.fields.content_id => d.content_id.clone(),
				self.fields.name => d.name.clone(),
				self.fields.text => d.text.clone(),
				self.fields.level => u64::from(d.level.as_u8()),
				self.fields.content_type => d.content_type.as_str().to_string(),
				self.fields.category => Facet::from(&d.category),
				self.fields.category_text => d.category.clone(),
			);
			index_writer.add_document(doc)?;
		}
		index_writer.commit()?;
		debug!(documents = docs.len(), "committed text index");
		Ok(())
	}

	fn search(&self, query: &str, k: usize) -> anyhow::Result<Vec<SearchHit>> {
		let reader = self.index.reader()?;
		let searcher = reader.searcher();
		let qp = QueryParser::for_index(&self.index, self.fields.default_search_fields());
		let q = qp.parse_query(query)?;
		let top_docs = searcher.search(&q, &TopDocs::with_limit(k))?;
		let mut hits = Vec::new();
		for (score, addr) in top_docs {
			let doc: TantivyDocument = searcher.doc(addr)?;
			let id = doc.get_first(self.fields.id).and_then(|v| v.as_str()).unwrap_or("").to_string();
			let content_id = doc.get_first(self.fields.content_id).and_then(|v| v.as_str()).unwrap_or("").to_string();
			let level = doc.get_first(self.fields.level).and_then(|v| v.as_u64()).unwrap_or(0);
			let level = ComplexityLevel::try_from(u8::try_from(level)?)?;
			hits.push(SearchHit { id, content_id, level, score });
		}
		Ok(hits)
	}
}
