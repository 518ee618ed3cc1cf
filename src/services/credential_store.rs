use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use crate::errors::{AppResult, ValidationError};
use crate::errors::store::StoreResult;
use crate::models::Credential;

/// Credentials kept in a CSV file with a `Username,Password` header.
///
/// Passwords are stored and compared as plaintext, which is insecure.
/// Usernames are not unique: a login matches on the exact pair.
#[derive(Clone)]
pub struct CredentialStore {
    path: Arc<PathBuf>,
    // Serializes read-modify-write cycles within this process.
    write_lock: Arc<Mutex<()>>,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a credential. Empty or whitespace-only fields are rejected
    /// before the file is touched.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<()> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(ValidationError::EmptyField.into());
        }

        let _guard = self.write_lock.lock().await;
        let mut credentials = self.load()?;
        credentials.push(Credential {
            username: username.to_string(),
            password: password.to_string(),
        });
        self.replace(&credentials)?;

        tracing::debug!("Stored credential #{} in {}", credentials.len(), self.path.display());
        Ok(())
    }

    /// True iff some stored record has exactly this username and password.
    /// A store that does not exist yet matches nothing.
    pub async fn verify(&self, username: &str, password: &str) -> AppResult<bool> {
        let credentials = self.load()?;
        Ok(credentials.iter().any(|c| c.matches(username, password)))
    }

    /// Number of stored records.
    pub async fn len(&self) -> AppResult<usize> {
        Ok(self.load()?.len())
    }

    fn load(&self) -> StoreResult<Vec<Credential>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(self.path.as_path())?;
        let credentials = reader
            .deserialize::<Credential>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(credentials)
    }

    // Writes the full set to a sibling temp file, then renames it into place
    // so readers never see a half-written file.
    fn replace(&self, credentials: &[Credential]) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = csv::Writer::from_writer(temp.as_file_mut());
            for credential in credentials {
                writer.serialize(credential)?;
            }
            writer.flush()?;
        }
        temp.persist(self.path.as_path())?;
        Ok(())
    }
}
