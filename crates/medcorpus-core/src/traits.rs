use crate::types::{EducationalContent, LegacyEducationalContent, LevelDocument, SearchHit};

/// Anything a [`Registry`](crate::registry::Registry) can hold.
pub trait Record {
    fn id(&self) -> &str;

    /// The fields `Registry::search` matches against, in no particular order.
    fn search_fields(&self) -> Vec<&str>;
}

pub trait TextIndexer: Send + Sync {
    fn index(&self, docs: &[LevelDocument]) -> anyhow::Result<()>;
    fn search(&self, query: &str, k: usize) -> anyhow::Result<Vec<SearchHit>>;
}

impl Record for EducationalContent {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.name.as_str()];
        if let Some(name_es) = &self.name_es {
            fields.push(name_es);
        }
        fields.extend(self.alternate_names.iter().map(String::as_str));
        fields.extend(self.tags.topics.iter().map(String::as_str));
        fields.extend(self.tags.keywords.iter().map(String::as_str));
        fields.extend(self.levels.values().map(|l| l.summary.as_str()));
        fields
    }
}

impl Record for LegacyEducationalContent {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.id.as_str(),
            self.title.as_str(),
            self.category.as_str(),
            self.subcategory.as_str(),
            self.description.as_str(),
        ];
        fields.extend(self.levels.values().map(|l| l.title.as_str()));
        fields
    }
}
