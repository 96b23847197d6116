pub mod tantivy_utils;
pub mod index;
pub mod search;

pub use index::CorpusIndexer;
pub use search::{CorpusSearchEngine, SearchResult};
