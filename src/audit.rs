use serde_json::Value;
use uuid::Uuid;

/// Records a user-visible mutation as a structured event on the `audit`
/// target.
pub fn log_audit(user_id: Option<&str>, action: &str, resource: Option<&str>, metadata: Option<Value>) {
    let id = Uuid::new_v4();
    let metadata = metadata.unwrap_or_default();
    tracing::info!(
        target: "audit",
        event_id = %id,
        user_id = user_id.unwrap_or("-"),
        action,
        resource = resource.unwrap_or("-"),
        metadata = %metadata,
        "audit"
    );
}
