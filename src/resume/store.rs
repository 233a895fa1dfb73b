use crate::resume::types::Resume;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Resume not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistence behind the dashboard. Owns the resume lifecycle.
pub trait ResumeStore {
    fn list_resumes(&self) -> impl Future<Output = Result<Vec<Resume>>> + Send;

    fn delete_resume(&self, id: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Resumes kept as a JSON array on disk.
#[derive(Clone, Debug)]
pub struct JsonResumeStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonResumeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<Resume>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, resumes: &[Resume]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(resumes)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    #[cfg(test)]
    pub async fn insert_resume(&self, resume: Resume) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut resumes = self.read_all().await?;
        resumes.retain(|r| r.id != resume.id);
        resumes.push(resume);
        self.write_all(&resumes).await
    }
}

impl ResumeStore for JsonResumeStore {
    async fn list_resumes(&self) -> Result<Vec<Resume>> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    async fn delete_resume(&self, id: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut resumes = self.read_all().await?;

        let index = resumes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        resumes.remove(index);

        self.write_all(&resumes).await
    }
}
