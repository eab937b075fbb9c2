//! JSON file implementation of the link repository.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::domain::entities::{LinkCollection, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// On-disk layouts accepted when loading.
///
/// Current files hold `{ "next_id": .., "links": [..] }`; a bare array of
/// links is still read and gets its counter from the highest stored id.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredFile {
    Collection(LinkCollection),
    Links(Vec<ShortLink>),
}

/// Stores the link collection as JSON in a single file.
///
/// Each save writes a uniquely named temporary file in the same directory,
/// fsyncs it and renames it over the target, so readers never observe a
/// half-written collection. Concurrent writers in different processes are
/// not coordinated: the last rename wins.
pub struct JsonFileLinkRepository {
    path: PathBuf,
}

impl JsonFileLinkRepository {
    /// Creates a repository backed by the file at `path`.
    ///
    /// The file is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Replaces `path` with `contents` through a synced temp file and a rename.
fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[async_trait]
impl LinkRepository for JsonFileLinkRepository {
    async fn load_all(&self) -> Result<LinkCollection, AppError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Link file {} not found, starting empty", self.path.display());
                return Ok(LinkCollection::default());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(LinkCollection::default());
        }

        let mut collection = match serde_json::from_str::<StoredFile>(&content) {
            Ok(StoredFile::Collection(collection)) => collection,
            Ok(StoredFile::Links(links)) => LinkCollection::new(links),
            // Re-parse as the current layout for a precise error message.
            Err(_) => serde_json::from_str::<LinkCollection>(&content)?,
        };
        collection.normalize();

        info!(
            "Loaded {} short links from {}",
            collection.len(),
            self.path.display()
        );
        Ok(collection)
    }

    async fn save_all(&self, collection: &LinkCollection) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(collection)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, &json))
            .await
            .map_err(|e| {
                AppError::internal("Link file writer failed", json!({ "reason": e.to_string() }))
            })??;

        debug!(
            "Saved {} short links to {}",
            collection.len(),
            self.path.display()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn sample(id: u64, code: &str, expires_in_days: Option<i64>) -> ShortLink {
        let created_at = Utc::now();
        ShortLink {
            id,
            original_url: format!("https://example.com/{code}"),
            short_code: code.to_string(),
            short_url: format!("http://localhost:3000/{code}"),
            created_at,
            expires_at: expires_in_days.map(|d| created_at + Duration::days(d)),
        }
    }

    fn file_names(dir: &Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileLinkRepository::new(dir.path().join("links.json"));

        let collection = repo.load_all().await.unwrap();
        assert!(collection.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileLinkRepository::new(dir.path().join("links.json"));

        let collection = LinkCollection {
            next_id: 7,
            links: vec![sample(1, "abc123", None), sample(2, "promo", Some(30))],
        };
        repo.save_all(&collection).await.unwrap();

        let loaded = repo.load_all().await.unwrap();
        assert_eq!(loaded, collection);
        assert_eq!(file_names(dir.path()), vec!["links.json".to_string()]);
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/links.json");
        let repo = JsonFileLinkRepository::new(&path);

        repo.save_all(&LinkCollection::new(vec![sample(1, "nested", None)]))
            .await
            .unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_collection() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileLinkRepository::new(dir.path().join("links.json"));

        repo.save_all(&LinkCollection::new(vec![sample(1, "first", None)]))
            .await
            .unwrap();
        repo.save_all(&LinkCollection::new(vec![sample(2, "second", None)]))
            .await
            .unwrap();

        let loaded = repo.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.links[0].short_code, "second");
    }

    #[tokio::test]
    async fn test_concurrent_writers_do_not_share_a_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");

        let handles: Vec<_> = (0..8u64)
            .map(|i| {
                let repo = JsonFileLinkRepository::new(&path);
                tokio::spawn(async move {
                    let links = (1..=50).map(|n| sample(n, &format!("w{i}n{n}"), None)).collect();
                    repo.save_all(&LinkCollection::new(links)).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let loaded = JsonFileLinkRepository::new(&path).load_all().await.unwrap();
        assert_eq!(loaded.len(), 50);
        assert_eq!(loaded.next_id, 51);
        assert_eq!(file_names(dir.path()), vec!["links.json".to_string()]);
    }

    #[tokio::test]
    async fn test_bare_array_file_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");
        let links = vec![sample(3, "old", None), sample(5, "older", None)];
        std::fs::write(&path, serde_json::to_string(&links).unwrap()).unwrap();

        let loaded = JsonFileLinkRepository::new(path).load_all().await.unwrap();
        assert_eq!(loaded.links, links);
        assert_eq!(loaded.next_id, 6);
    }

    #[tokio::test]
    async fn test_stale_counter_is_raised_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");
        let stale = LinkCollection {
            next_id: 1,
            links: vec![sample(9, "edited", None)],
        };
        std::fs::write(&path, serde_json::to_string(&stale).unwrap()).unwrap();

        let loaded = JsonFileLinkRepository::new(path).load_all().await.unwrap();
        assert_eq!(loaded.next_id, 10);
    }

    #[tokio::test]
    async fn test_empty_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(&path, "").unwrap();

        let collection = JsonFileLinkRepository::new(path).load_all().await.unwrap();
        assert!(collection.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = JsonFileLinkRepository::new(path).load_all().await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
