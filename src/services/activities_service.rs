use thiserror::Error;
use tracing::info;

use crate::models::ConfirmationMessage;
use crate::store::activity_store::{ActivityMap, ActivityStore};

/// Why a signup or unregister request was rejected. The display strings
/// go out verbatim as the `detail` field of the error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

pub async fn list_activities(store: &ActivityStore) -> ActivityMap {
    store.snapshot().await
}

/// Append `email` to the activity's roster. Emails are taken verbatim:
/// no syntax validation, no normalization, and no capacity check
/// (`max_participants` is advisory).
pub async fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<ConfirmationMessage, SignupError> {
    let mut activities = store.write().await;
    let activity = activities
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(SignupError::AlreadySignedUp);
    }
    activity.participants.push(email.to_string());

    info!(activity = %activity_name, email = %email, "participant signed up");
    Ok(ConfirmationMessage {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

/// Remove `email` from the activity's roster.
pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<ConfirmationMessage, SignupError> {
    let mut activities = store.write().await;
    let activity = activities
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    let Some(pos) = activity.participants.iter().position(|p| p == email) else {
        return Err(SignupError::NotRegistered);
    };
    activity.participants.remove(pos);

    info!(activity = %activity_name, email = %email, "participant unregistered");
    Ok(ConfirmationMessage {
        message: format!("Unregistered {} from {}", email, activity_name),
    })
}
