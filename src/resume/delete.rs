use crate::resume::local_store::LocalStore;
use crate::resume::store::{ResumeStore, Result, StoreError};
use crate::resume::types::skills_key;
use tracing::{error, info, warn};

/// Deletes a resume and drops its cached skill suggestions.
///
/// A resume the store no longer knows counts as deleted. A failure to clear
/// the cache is logged and ignored: the resume itself is already gone.
pub async fn delete_resume_and_skills<R, L>(store: &R, local: &L, id: &str) -> Result<()>
where
    R: ResumeStore,
    L: LocalStore,
{
    match store.delete_resume(id).await {
        Ok(()) => info!(id = %id, "Resume deleted"),
        Err(StoreError::NotFound(_)) => info!(id = %id, "Resume already removed"),
        Err(e) => {
            error!(id = %id, error = %e, "Failed to delete resume");
            return Err(e);
        }
    }

    let key = skills_key(id);
    if let Err(e) = local.remove_item(&key) {
        warn!(key = %key, error = %e, "Failed to clear cached skills");
    }

    Ok(())
}
