//! File-backed session store.
//!
//! Persists the session as a small JSON document `{ "<key>": <user> }` at
//! a caller-chosen path, so a demo survives process restarts the way the
//! reference survives page reloads. File access goes through `cap-std`:
//! the adapter opens the parent directory once per call and never touches
//! anything outside it.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::ports::{SessionStore, SessionStoreError};
use crate::domain::User;

use super::SESSION_KEY;

/// JSON-file-backed [`SessionStore`].
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    /// Store sessions at `path`. The parent directory must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn split_path(&self) -> Result<(&Path, &Path), SessionStoreError> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| SessionStoreError::backend("session path has no file name"))?;
        let parent = match self.path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
            Some(parent) => parent,
            None => Path::new("."),
        };
        Ok((parent, Path::new(file_name)))
    }

    fn open_dir(&self) -> Result<(Dir, &Path), SessionStoreError> {
        let (parent, file_name) = self.split_path()?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| SessionStoreError::backend(err.to_string()))?;
        Ok((dir, file_name))
    }
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn put(&self, user: &User) -> Result<(), SessionStoreError> {
        let value = serde_json::to_value(user)
            .map_err(|err| SessionStoreError::serialization(err.to_string()))?;
        let mut document = Map::new();
        document.insert(SESSION_KEY.to_owned(), value);
        let blob = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|err| SessionStoreError::serialization(err.to_string()))?;

        let (dir, file_name) = self.open_dir()?;
        dir.write(file_name, blob.as_bytes())
            .map_err(|err| SessionStoreError::backend(err.to_string()))
    }

    async fn get(&self) -> Result<Option<User>, SessionStoreError> {
        let (dir, file_name) = self.open_dir()?;
        let blob = match dir.read_to_string(file_name) {
            Ok(blob) => blob,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SessionStoreError::backend(err.to_string())),
        };

        let parsed: Result<Value, _> = serde_json::from_str(&blob);
        let user = parsed
            .ok()
            .and_then(|mut document| document.get_mut(SESSION_KEY).map(Value::take))
            .and_then(|value| serde_json::from_value::<User>(value).ok());
        if user.is_none() {
            warn!(path = %self.path.display(), "session file failed to parse; treating as no session");
        }
        Ok(user)
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        let (dir, file_name) = self.open_dir()?;
        match dir.remove_file(file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStoreError::backend(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{Role, UserId};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn user() -> User {
        let created = Utc.with_ymd_and_hms(2026, 2, 14, 8, 0, 0).unwrap();
        User {
            id: UserId::random(),
            name: "Astrid Admin".to_owned(),
            email: "astrid@example.com".to_owned(),
            role: Role::Admin,
            created_at: created,
            updated_at: created,
        }
    }

    fn store_in(dir: &TempDir) -> JsonFileSessionStore {
        JsonFileSessionStore::new(dir.path().join("session.json"))
    }

    #[tokio::test]
    async fn round_trip_preserves_the_user() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let original = user();

        store.put(&original).await.expect("put succeeds");
        let loaded = store.get().await.expect("get succeeds").expect("present");
        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn a_missing_file_reads_as_no_session() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        assert_eq!(store.get().await.expect("get succeeds"), None);
    }

    #[tokio::test]
    async fn a_corrupt_file_reads_as_no_session() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        std::fs::write(dir.path().join("session.json"), b"{broken").expect("write fixture");
        assert_eq!(store.get().await.expect("get succeeds"), None);
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        store.clear().await.expect("clear on missing file succeeds");
        store.put(&user()).await.expect("put succeeds");
        store.clear().await.expect("clear succeeds");
        assert_eq!(store.get().await.expect("get succeeds"), None);
    }
}
