use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::submission::Submission;

/// File name used when no explicit location is configured.
pub const DEFAULT_FILE_NAME: &str = "student_responses.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] io::Error),
}

/// Holds at most one rendered [`Submission`].
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Replace the stored record with `submission`.
    async fn write(&self, submission: &Submission) -> Result<(), StoreError>;

    /// Return the stored text, or `None` if nothing has been written.
    async fn read(&self) -> Result<Option<String>, StoreError>;
}

/// Store backed by a single text file, replaced atomically on every write.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform temp directory when there is one, otherwise in
    /// the working directory.
    pub fn default_location() -> Self {
        let tmp = std::env::temp_dir();
        if tmp.is_dir() {
            Self::new(tmp.join(DEFAULT_FILE_NAME))
        } else {
            Self::new(DEFAULT_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        self.path
            .with_file_name(format!(".{name}.{}.tmp", uuid::Uuid::new_v4().simple()))
    }

    async fn replace(&self, temp: &Path, contents: &[u8]) -> io::Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(temp)
            .await?;
        file.write_all(contents).await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(temp, &self.path).await
    }
}

#[async_trait]
impl ResponseStore for FileStore {
    async fn write(&self, submission: &Submission) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let temp = self.temp_path();
        if let Err(e) = self.replace(&temp, submission.render().as_bytes()).await {
            warn!(path = %self.path.display(), error = %e, "failed to write responses");
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }
        info!(path = %self.path.display(), "responses saved");
        Ok(())
    }

    async fn read(&self) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => {
                debug!(path = %self.path.display(), "responses loaded");
                Ok(Some(text))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Volatile store for tests and ephemeral runs.
#[derive(Default)]
pub struct InMemoryStore {
    slot: RwLock<Option<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResponseStore for InMemoryStore {
    async fn write(&self, submission: &Submission) -> Result<(), StoreError> {
        *self.slot.write().await = Some(submission.render());
        Ok(())
    }

    async fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QUESTIONS;
    use std::sync::Arc;

    fn sample() -> Submission {
        Submission::new("Did it late", "asked a friend", "raised hand twice", "3")
    }

    #[tokio::test]
    async fn read_before_write_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("responses.txt"));
        assert!(store.read().await.unwrap().is_none());
        assert!(InMemoryStore::new().read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn write_then_read_round_trips_labels_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("responses.txt"));
        store.write(&sample()).await.unwrap();
        let text = store.read().await.unwrap().unwrap();

        let mut last = 0;
        for label in QUESTIONS {
            let at = text.find(label).expect("label present");
            assert!(at >= last, "labels out of order");
            assert_eq!(text.matches(label).count(), 1);
            last = at;
        }
        for answer in ["Did it late", "asked a friend", "raised hand twice"] {
            assert!(text.contains(answer));
        }
        assert!(text.contains(&format!("{}\n3\n", QUESTIONS[3])));
    }

    #[tokio::test]
    async fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("responses.txt");
        let store = FileStore::new(&path);
        store.write(&sample()).await.unwrap();
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn later_write_replaces_earlier_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("responses.txt"));
        store.write(&sample()).await.unwrap();
        store
            .write(&Submission::new("on time", "read the docs", "quiet", "10"))
            .await
            .unwrap();
        let text = store.read().await.unwrap().unwrap();
        assert!(text.contains("on time"));
        assert!(!text.contains("Did it late"));
    }

    #[tokio::test]
    async fn no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("responses.txt"));
        store.write(&sample()).await.unwrap();
        store.write(&sample()).await.unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn unwritable_location_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();
        let store = FileStore::new(blocker.join("responses.txt"));
        let err = store.write(&sample()).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn previous_record_survives_failed_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.txt");
        let store = FileStore::new(&path);
        store.write(&sample()).await.unwrap();

        // A directory in place of the target makes the final rename fail.
        let blocked = FileStore::new(dir.path().join("blocked"));
        std::fs::create_dir(dir.path().join("blocked")).unwrap();
        std::fs::write(dir.path().join("blocked").join("x"), "x").unwrap();
        assert!(blocked.write(&sample()).await.is_err());

        assert!(store.read().await.unwrap().unwrap().contains("Did it late"));
        let leftovers = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn concurrent_writes_never_mix_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStore::new(dir.path().join("responses.txt")));
        let subs: Vec<Submission> = (0..16)
            .map(|i| {
                let tag = format!("writer-{i}-").repeat(200);
                Submission::new(tag.clone(), tag.clone(), tag.clone(), i.to_string())
            })
            .collect();
        let rendered: Vec<String> = subs.iter().map(Submission::render).collect();

        let mut handles = Vec::new();
        for sub in subs {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.write(&sub).await }));
        }
        for _ in 0..16 {
            let store = store.clone();
            let rendered = rendered.clone();
            handles.push(tokio::spawn(async move {
                if let Some(text) = store.read().await? {
                    assert!(rendered.contains(&text), "observed a torn record");
                }
                Ok::<(), StoreError>(())
            }));
        }
        for h in handles {
            h.await.unwrap().unwrap();
        }
        let last = store.read().await.unwrap().unwrap();
        assert!(rendered.contains(&last));
    }
}
