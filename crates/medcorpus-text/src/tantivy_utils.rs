//! medcorpus-text
//!
//! Tantivy-based indexing and search over level documents. See `index` and
//! `search`; the `medcorpus` CLI drives both from the command line.
use tantivy::schema::{Field, Schema, TextFieldIndexing, TextOptions, IndexRecordOption, FacetOptions, STRING, STORED, INDEXED, FAST};
use tantivy::tokenizer::{TextAnalyzer, SimpleTokenizer, LowerCaser, StopWordFilter};
use tantivy::Index;

pub const TOKENIZER_NAME: &str = "text_with_stopwords";

const ENGLISH_STOP_WORDS: &[&str] = &[
	"a","an","and","are","as","at","be","by","for","from","has","he","in","is","it","its","of","on","that","the","to","was","will","with","or","but","not","this","these","they","them","their","there","then","than","so","if","when","where","why","how","what","which","who","whom","whose","can","could","should","would","may","might","must","shall","do","does","did","have","had","having",
];

// Content packs may be written in Spanish.
const SPANISH_STOP_WORDS: &[&str] = &[
	"el","la","los","las","un","una","unos","unas","de","del","y","e","o","u","en","que","por","para","con","sin","se","su","sus","es","son","al","lo","como","más","pero",
];

pub fn build_schema() -> Schema {
	let mut schema_builder = Schema::builder();
	schema_builder.add_text_field("id", STRING | STORED);
	schema_builder.add_text_field("content_id", STRING | STORED);
	let text_field_indexing = TextFieldIndexing::default().set_tokenizer(TOKENIZER_NAME).set_index_option(IndexRecordOption::WithFreqsAndPositions);
	let text_options = TextOptions::default().set_indexing_options(text_field_indexing).set_stored();
	schema_builder.add_text_field("name", text_options.clone());
	schema_builder.add_text_field("text", text_options);
	schema_builder.add_u64_field("level", INDEXED | STORED | FAST);
	schema_builder.add_text_field("content_type", STRING | STORED);
	schema_builder.add_facet_field("category", FacetOptions::default());
	schema_builder.add_text_field("category_text", STRING | STORED);
	schema_builder.build()
}

pub fn register_tokenizer(index: &Index) {
	let stop_words = ENGLISH_STOP_WORDS.iter().chain(SPANISH_STOP_WORDS).map(|s| s.to_string());
	let tokenizer = TextAnalyzer::builder(SimpleTokenizer::default())
		.filter(LowerCaser)
		.filter(StopWordFilter::remove(stop_words))
		.build();
	index.tokenizers().register(TOKENIZER_NAME, tokenizer);
}

/// Field handles resolved once from a schema built by [`build_schema`].
#[derive(Debug, Clone, Copy)]
pub struct CorpusFields {
	pub id: Field,
	pub content_id: Field,
	pub name: Field,
	pub text: Field,
	pub level: Field,
	pub content_type: Field,
	pub category: Field,
	pub category_text: Field,
}

impl CorpusFields {
	pub fn from_schema(schema: &Schema) -> anyhow::Result<Self> {
		Ok(Self {
			id: schema.get_field("id")?,
			content_id: schema.get_field("content_id")?,
			name: schema.get_field("name")?,
			text: schema.get_field("text")?,
			level: schema.get_field("level")?,
			content_type: schema.get_field("content_type")?,
			category: schema.get_field("category")?,
			category_text: schema.get_field("category_text")?,
		})
	}

	/// Fields the query parser searches by default.
	pub fn default_search_fields(&self) -> Vec<Field> {
		vec![self.name, self.text]
	}
}
