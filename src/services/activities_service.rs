use std::collections::BTreeMap;

use crate::models::Activity;
use crate::store::{ActivityStore, StoreError};

pub async fn list_activities(store: &ActivityStore) -> BTreeMap<String, Activity> {
    store.snapshot().await
}

/// Register `email` for an activity and build the confirmation message the
/// frontend displays.
pub async fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, StoreError> {
    store.signup(activity_name, email).await?;
    tracing::info!(activity = %activity_name, email = %email, "participant signed up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Remove `email` from an activity's participant list.
pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, StoreError> {
    store.unregister(activity_name, email).await?;
    tracing::info!(activity = %activity_name, email = %email, "participant unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
