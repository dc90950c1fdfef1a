use crate::storage::{DocumentStore, StoreError};
use serde_json::Value;
use tracing::info;

pub const MEMBERS_COLLECTION: &str = "men";
pub const MEMBERS_KEY: &str = "members";

/// Names on the member roster; an absent roster document reads as empty.
pub async fn load_members(store: &dyn DocumentStore) -> Result<Vec<String>, StoreError> {
    let Some(doc) = store.get(MEMBERS_COLLECTION, MEMBERS_KEY).await? else {
        info!("no member roster at {MEMBERS_COLLECTION}/{MEMBERS_KEY}");
        return Ok(Vec::new());
    };

    let names = doc
        .get("names")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    Ok(names)
}
