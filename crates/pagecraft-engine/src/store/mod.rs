//! Storage collaborators for serialized markup.
//!
//! The engine only ever hands a store a string and asks for one back; keys
//! are relative paths such as `blog/austin-market-update.html`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{Component, RelativePath, RelativePathBuf};

use crate::blocks::IdGenerator;
use crate::editing::Document;

/// File extension of stored pages.
pub const MARKUP_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Page not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidRoot(String),
    #[error("Page key leaves the content directory: {0}")]
    InvalidKey(String),
}

/// Where serialized markup is loaded from and saved to.
pub trait MarkupStore {
    fn load(&self, key: &RelativePath) -> Result<String, StoreError>;
    fn save(&mut self, key: &RelativePath, markup: &str) -> Result<(), StoreError>;
    /// Every stored key, sorted.
    fn keys(&self) -> Result<Vec<RelativePathBuf>, StoreError>;
}

/// Loads a page into an editable document.
pub fn load_document<G: IdGenerator>(
    store: &impl MarkupStore,
    key: &RelativePath,
    ids: G,
) -> Result<Document<G>, StoreError> {
    let markup = store.load(key)?;
    Ok(Document::load(&markup, ids))
}

/// Serializes a document and saves it under `key`.
pub fn save_document<G: IdGenerator>(
    store: &mut impl MarkupStore,
    key: &RelativePath,
    doc: &Document<G>,
) -> Result<(), StoreError> {
    store.save(key, &doc.to_markup())
}

/// Pages stored as `.html` files under a content directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens an existing content directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        validate_content_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a key to its file, refusing keys that climb out of the root.
    fn resolve(&self, key: &RelativePath) -> Result<PathBuf, StoreError> {
        if key.components().any(|c| c == Component::ParentDir) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(key.to_path(&self.root))
    }
}

impl MarkupStore for FileStore {
    fn load(&self, key: &RelativePath) -> Result<String, StoreError> {
        let absolute_path = self.resolve(key)?;
        if !absolute_path.exists() {
            return Err(StoreError::NotFound(key.to_string()));
        }
        Ok(fs::read_to_string(&absolute_path)?)
    }

    fn save(&mut self, key: &RelativePath, markup: &str) -> Result<(), StoreError> {
        let absolute_path = self.resolve(key)?;

        // Create parent directories if they don't exist
        if let Some(parent) = absolute_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(fs::write(&absolute_path, markup)?)
    }

    fn keys(&self) -> Result<Vec<RelativePathBuf>, StoreError> {
        let mut files = Vec::new();
        scan_directory_recursive(&self.root, &mut files)?;

        let mut keys: Vec<_> = files
            .iter()
            .filter_map(|path| path.strip_prefix(&self.root).ok())
            .filter_map(|rel| RelativePathBuf::from_path(rel).ok())
            .collect();
        keys.sort();
        Ok(keys)
    }
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), StoreError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == MARKUP_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() || !path.is_dir() {
        return Err(StoreError::InvalidRoot(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// In-memory store, handy for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pages: BTreeMap<RelativePathBuf, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkupStore for MemoryStore {
    fn load(&self, key: &RelativePath) -> Result<String, StoreError> {
        self.pages
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn save(&mut self, key: &RelativePath, markup: &str) -> Result<(), StoreError> {
        self.pages.insert(key.to_relative_path_buf(), markup.to_string());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<RelativePathBuf>, StoreError> {
        Ok(self.pages.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::SequentialIdGenerator;
    use crate::editing::Cmd;
    use crate::tests::{create_test_content_dir, create_test_file};

    #[test]
    fn test_open_missing_directory() {
        let result = FileStore::open("/this/path/does/not/exist");
        assert!(matches!(result, Err(StoreError::InvalidRoot(_))));
    }

    #[test]
    fn test_keys_are_sorted_relative_html_paths() {
        let content_dir = create_test_content_dir();
        create_test_file(&content_dir, "zilker.html", "<h2>Zilker</h2>");
        create_test_file(&content_dir, "blog/market-update.html", "<p>Up</p>");
        create_test_file(&content_dir, "notes.txt", "ignored");
        create_test_file(&content_dir, "data.json", "{}");

        let store = FileStore::open(content_dir.path()).unwrap();
        let keys = store.keys().unwrap();

        assert_eq!(
            keys,
            vec![
                RelativePathBuf::from("blog/market-update.html"),
                RelativePathBuf::from("zilker.html"),
            ]
        );
    }

    #[test]
    fn test_load_missing_page() {
        let content_dir = create_test_content_dir();
        let store = FileStore::open(content_dir.path()).unwrap();

        let result = store.load(RelativePath::new("missing.html"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let content_dir = create_test_content_dir();
        let mut store = FileStore::open(content_dir.path()).unwrap();
        let key = RelativePath::new("neighborhoods/78704/bouldin.html");

        store.save(key, "<h2>Bouldin Creek</h2>").unwrap();

        assert_eq!(store.load(key).unwrap(), "<h2>Bouldin Creek</h2>");
        assert!(content_dir.path().join("neighborhoods/78704").is_dir());
    }

    #[test]
    fn test_keys_outside_root_are_rejected() {
        let content_dir = create_test_content_dir();
        let mut store = FileStore::open(content_dir.path()).unwrap();
        let outside = content_dir.path().parent().unwrap().join("outside.html");

        for key in ["../outside.html", "blog/../../outside.html"] {
            let key = RelativePath::new(key);
            assert!(matches!(store.save(key, "<hr />"), Err(StoreError::InvalidKey(_))));
            assert!(matches!(store.load(key), Err(StoreError::InvalidKey(_))));
        }
        assert!(!outside.exists());

        let key = RelativePath::new("./blog/inside.html");
        store.save(key, "<hr />").unwrap();
        assert!(content_dir.path().join("blog/inside.html").is_file());
    }

    #[test]
    fn test_document_round_trip_through_file_store() {
        let content_dir = create_test_content_dir();
        create_test_file(&content_dir, "page.html", "<h2>Intro</h2>\n<p>Hello</p>");
        let mut store = FileStore::open(content_dir.path()).unwrap();
        let key = RelativePath::new("page.html");

        let mut doc = load_document(&store, key, SequentialIdGenerator::new("b")).unwrap();
        doc.apply(Cmd::Add {
            kind: crate::blocks::BlockKind::Divider,
            after: None,
        })
        .unwrap();
        save_document(&mut store, key, &doc).unwrap();

        assert_eq!(
            store.load(key).unwrap(),
            "<h2 id=\"intro\">Intro</h2>\n<p>Hello</p>\n<hr />"
        );
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        let key = RelativePath::new("a.html");

        assert!(matches!(store.load(key), Err(StoreError::NotFound(_))));
        store.save(key, "<hr />").unwrap();
        assert_eq!(store.load(key).unwrap(), "<hr />");
        assert_eq!(store.keys().unwrap(), vec![RelativePathBuf::from("a.html")]);
    }
}
