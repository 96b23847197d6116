use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{EducationalContent, LevelDocument};

const PACK_EXTENSION: &str = "json";

/// Reads content packs: `.json` files holding one record or an array of records.
#[derive(Debug, Default)]
pub struct ContentLoader;

impl ContentLoader {
    pub fn new() -> Self { Self }

    pub fn load_directory(&self, content_dir: &Path) -> Result<Vec<EducationalContent>> {
        let files = self.list_pack_files(content_dir)?;
        self.load_files(content_dir, &files)
    }

    pub fn load_directory_limited(&self, content_dir: &Path, limit: usize) -> Result<Vec<EducationalContent>> {
        let mut files = self.list_pack_files(content_dir)?;
        if files.len() > limit {
            files.truncate(limit);
            info!(limit, "limited content packs");
        }
        self.load_files(content_dir, &files)
    }

    pub fn load_file(&self, path: &Path) -> Result<Vec<EducationalContent>> {
        let raw = fs::read_to_string(path)?;
        let parse_error = |e: serde_json::Error| Error::Parse { line: e.line(), message: format!("{}: {}", path.display(), e) };
        if raw.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<EducationalContent>>(&raw).map_err(parse_error)
        } else {
            serde_json::from_str::<EducationalContent>(&raw).map(|item| vec![item]).map_err(parse_error)
        }
    }

    fn load_files(&self, content_dir: &Path, files: &[PathBuf]) -> Result<Vec<EducationalContent>> {
        if files.is_empty() {
            info!(dir = %content_dir.display(), "no content packs found");
            return Ok(vec![]);
        }
        let mut all = Vec::new();
        for (file_index, file_path) in files.iter().enumerate() {
            debug!(file = %file_path.display(), "loading pack {}/{}", file_index + 1, files.len());
            all.extend(self.load_file(file_path)?);
        }
        info!(files = files.len(), records = all.len(), "loaded content packs");
        Ok(all)
    }

    fn list_pack_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(Error::NotFound(format!("content directory {}", root.display())));
        }
        let mut pack_files = Vec::new();
        for entry in walkdir::WalkDir::new(root) {
            let entry = entry.map_err(io::Error::from)?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().and_then(|s| s.to_str()) == Some(PACK_EXTENSION) {
                pack_files.push(path.to_path_buf());
            }
        }
        pack_files.sort();
        Ok(pack_files)
    }
}

/// Flattens a record into one indexable document per authored level.
pub fn level_documents(content: &EducationalContent) -> Vec<LevelDocument> {
    let category = content.facet_path();
    content
        .levels
        .values()
        .map(|level| {
            let mut parts = vec![level.summary.clone(), level.explanation.clone()];
            if !level.key_terms.is_empty() {
                let terms: Vec<String> = level
                    .key_terms
                    .iter()
                    .map(|t| format!("{}: {}", t.term, t.definition))
                    .collect();
                parts.push(terms.join("\n"));
            }
            LevelDocument {
                id: format!("{}:{}", content.id, level.level),
                content_id: content.id.clone(),
                level: level.level,
                content_type: content.content_type,
                category: category.clone(),
                name: content.name.clone(),
                text: parts.join("\n\n"),
            }
        })
        .collect()
}
