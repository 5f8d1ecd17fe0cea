//! In-memory, path-keyed file store used to collect rendered modules.
//!
//! Paths are POSIX-style and cleaned before every lookup. The root
//! directory is `.` and always exists.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("{0}: no such file or directory")]
    NotFound(String),
    #[error("{0}: not a directory")]
    NotADirectory(String),
    #[error("{0}: is a directory")]
    IsADirectory(String),
}

pub type FsResult<T> = std::result::Result<T, FsError>;

#[derive(Debug, Clone)]
enum Entry {
    File(Vec<u8>),
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    pub size: u64,
    pub is_dir: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Normalize a path: drop empty and `.` segments, resolve `..` without
/// climbing above the root, ignore a leading `/`. The root is `.`.
pub fn clean_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

/// Parent directory of a cleaned path, `None` for the root itself.
fn parent_dir(path: &str) -> Option<&str> {
    if path == "." {
        return None;
    }
    Some(path.rsplit_once('/').map_or(".", |(parent, _)| parent))
}

fn base_name(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

#[derive(Debug)]
pub struct MemFs {
    entries: RwLock<BTreeMap<String, Entry>>,
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemFs {
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(".".to_string(), Entry::Directory);
        Self {
            entries: RwLock::new(entries),
        }
    }

    fn read_entries(&self) -> RwLockReadGuard<'_, BTreeMap<String, Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create `path` and every missing ancestor. Existing directories are
    /// left alone; a file anywhere along the way is an error.
    pub fn create_dir_all(&self, path: &str) -> FsResult<()> {
        let path = clean_path(path);
        let mut entries = self.write_entries();
        Self::create_dirs(&mut entries, &path)
    }

    fn create_dirs(entries: &mut BTreeMap<String, Entry>, path: &str) -> FsResult<()> {
        if path == "." {
            return Ok(());
        }

        let mut current = String::new();
        for segment in path.split('/') {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);

            match entries.get(&current) {
                Some(Entry::Directory) => {}
                Some(Entry::File(_)) => return Err(FsError::NotADirectory(current)),
                None => {
                    entries.insert(current.clone(), Entry::Directory);
                }
            }
        }
        Ok(())
    }

    /// Create or overwrite a file, creating missing parent directories.
    pub fn write_file(&self, path: &str, data: &[u8]) -> FsResult<()> {
        let path = clean_path(path);
        let mut entries = self.write_entries();

        if matches!(entries.get(&path), Some(Entry::Directory)) {
            return Err(FsError::IsADirectory(path));
        }
        if let Some(parent) = parent_dir(&path) {
            Self::create_dirs(&mut entries, parent)?;
        }

        trace!(path = %path, bytes = data.len(), "write file");
        entries.insert(path, Entry::File(data.to_vec()));
        Ok(())
    }

    pub fn read_file(&self, path: &str) -> FsResult<Vec<u8>> {
        let path = clean_path(path);
        match self.read_entries().get(&path) {
            Some(Entry::File(data)) => Ok(data.clone()),
            Some(Entry::Directory) => Err(FsError::IsADirectory(path)),
            None => Err(FsError::NotFound(path)),
        }
    }

    pub fn stat(&self, path: &str) -> FsResult<Metadata> {
        let path = clean_path(path);
        let entries = self.read_entries();
        let entry = entries
            .get(&path)
            .ok_or_else(|| FsError::NotFound(path.clone()))?;

        Ok(match entry {
            Entry::File(data) => Metadata {
                name: base_name(&path).to_string(),
                size: data.len() as u64,
                is_dir: false,
            },
            Entry::Directory => Metadata {
                name: base_name(&path).to_string(),
                size: 0,
                is_dir: true,
            },
        })
    }

    /// Direct children of a directory, sorted by name.
    pub fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntry>> {
        let path = clean_path(path);
        let entries = self.read_entries();

        match entries.get(&path) {
            Some(Entry::Directory) => {}
            Some(Entry::File(_)) => return Err(FsError::NotADirectory(path)),
            None => return Err(FsError::NotFound(path)),
        }

        let mut children: Vec<DirEntry> = entries
            .iter()
            .filter(|(key, _)| key.as_str() != "." && parent_dir(key) == Some(path.as_str()))
            .map(|(key, entry)| DirEntry {
                name: base_name(key).to_string(),
                is_dir: matches!(entry, Entry::Directory),
            })
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    /// Every file path in the store, sorted.
    pub fn files(&self) -> Vec<String> {
        self.read_entries()
            .iter()
            .filter(|(_, entry)| matches!(entry, Entry::File(_)))
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.read_entries().contains_key(&clean_path(path))
    }
}
