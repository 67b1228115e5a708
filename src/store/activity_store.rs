use std::collections::BTreeMap;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;
use crate::store::seed;

/// Rejections produced by the store. The Display strings double as the
/// `detail` payload of the HTTP error responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// In-memory activity table, owned by the process and handed to request
/// handlers behind an `Arc`. Each mutating operation runs its membership
/// check and the mutation under a single write-lock acquisition, so two
/// racing signups for the same email cannot both observe "not yet present".
pub struct ActivityStore {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityStore {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Store preloaded with the school's activity roster.
    pub fn seeded() -> Self {
        Self::new(seed::default_activities())
    }

    /// Full copy of the table, for the listing endpoint.
    pub async fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Append `email` to the activity's participant list.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), StoreError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(StoreError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(StoreError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the activity's participant list. Removing an email
    /// that was never signed up is an error, not a no-op.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), StoreError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(StoreError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(StoreError::NotSignedUp);
        };

        activity.participants.remove(pos);
        Ok(())
    }
}
