//! Document loading: resolve an identifier, read it whole, normalize it.

use std::{
    collections::HashMap,
    fmt, fs, io,
    ops::Deref,
    path::{Path, PathBuf},
};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowercased text with every ASCII punctuation character removed
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize raw document text
/// Trims surrounding whitespace, drops ASCII punctuation, lowercases.
/// Non-ASCII punctuation is kept; case folding is Unicode lowercase.
pub fn normalize(raw: &str) -> NormalizedText {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    NormalizedText(stripped.to_lowercase())
}

/// Resolves document identifiers into normalized text
///
/// Loading is a blocking whole-document read. Any failure is reported as
/// [`Error::DocumentUnavailable`] and never retried.
pub trait DocumentSource {
    fn load(&self, identifier: &str) -> Result<NormalizedText>;
}

impl<S> DocumentSource for &S
where
    S: DocumentSource + ?Sized,
{
    fn load(&self, identifier: &str) -> Result<NormalizedText> {
        (**self).load(identifier)
    }
}

/// Documents read from the filesystem
/// Relative identifiers resolve against `base_dir` when one is set.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    base_dir: Option<PathBuf>,
}

impl FileSource {
    /// Resolve identifiers as plain paths
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// Resolve relative identifiers against `base_dir`
    pub fn with_base_dir<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Path an identifier resolves to
    pub fn resolve(&self, identifier: &str) -> PathBuf {
        let path = Path::new(identifier);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl DocumentSource for FileSource {
    fn load(&self, identifier: &str) -> Result<NormalizedText> {
        let path = self.resolve(identifier);
        debug!("loading document {} from {}", identifier, path.display());
        let raw = fs::read_to_string(&path).map_err(|source| Error::DocumentUnavailable {
            identifier: identifier.to_string(),
            source,
        })?;
        let text = normalize(&raw);
        trace!("document {}: {} raw bytes, {} normalized bytes", identifier, raw.len(), text.len());
        Ok(text)
    }
}

/// In-memory documents keyed by identifier
/// Raw text is normalized on every load, exactly like [`FileSource`].
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
        }
    }

    /// Add (or replace) a document
    pub fn insert<K, V>(&mut self, identifier: K, raw: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.documents.insert(identifier.into(), raw.into());
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemorySource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut source = MemorySource::new();
        for (identifier, raw) in iter {
            source.insert(identifier, raw);
        }
        source
    }
}

impl DocumentSource for MemorySource {
    fn load(&self, identifier: &str) -> Result<NormalizedText> {
        debug!("loading in-memory document {}", identifier);
        self.documents
            .get(identifier)
            .map(|raw| normalize(raw.as_str()))
            .ok_or_else(|| Error::DocumentUnavailable {
                identifier: identifier.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such in-memory document"),
            })
    }
}

/// Load a document from the filesystem with the default [`FileSource`]
pub fn load_document(identifier: &str) -> Result<NormalizedText> {
    FileSource::new().load(identifier)
}
