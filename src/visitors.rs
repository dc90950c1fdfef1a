use crate::attendance::toggle_attendance;
use crate::classify::classify;
use crate::models::{Attendance, AttendanceUpdate, NewVisitor, ViewState, VisitorRecord, VisitorView};
use crate::storage::{DocumentStore, StoreError};
use thiserror::Error;
use tracing::{info, warn};

pub const VISITORS: &str = "visitors";

#[derive(Debug, Error)]
pub enum VisitorError {
    #[error("visitor name is required")]
    EmptyName,

    #[error("visitor {0} already exists")]
    AlreadyExists(String),

    #[error("visitor {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub async fn fetch_visitors(store: &dyn DocumentStore) -> Result<Vec<VisitorRecord>, StoreError> {
    let docs = store.list(VISITORS).await?;
    Ok(docs
        .iter()
        .map(|(id, doc)| VisitorRecord::from_document(id, doc))
        .collect())
}

/// Fetches every visitor and rebuilds the recent/older lists for `current_week`.
pub async fn load_view(
    store: &dyn DocumentStore,
    current_week: u32,
    threshold_weeks: u32,
) -> Result<ViewState, StoreError> {
    let records = fetch_visitors(store).await?;
    let split = classify(&records, current_week, threshold_weeks);
    let project = |list: Vec<&VisitorRecord>| -> Vec<VisitorView> {
        list.into_iter()
            .map(|record| VisitorView::project(record, current_week))
            .collect()
    };

    Ok(ViewState {
        current_week,
        recent: project(split.recent),
        older: project(split.older),
    })
}

/// Creates a visitor marked present for `week`. The trimmed name is the key.
pub async fn add_visitor(
    store: &dyn DocumentStore,
    visitor: NewVisitor,
    week: u32,
) -> Result<VisitorRecord, VisitorError> {
    let id = visitor.name.trim();
    if id.is_empty() {
        return Err(VisitorError::EmptyName);
    }

    if store.get(VISITORS, id).await?.is_some() {
        warn!("visitor {id} already exists");
        return Err(VisitorError::AlreadyExists(id.to_string()));
    }

    let mut record = VisitorRecord {
        id: id.to_string(),
        name: id.to_string(),
        address: visitor.address.trim().to_string(),
        invited_by: visitor.invited_by.trim().to_string(),
        contact_number: visitor.contact_number.trim().to_string(),
        ..Default::default()
    };
    record.attendance.insert(week, Attendance { present: true, timestamp: None });

    store.set(VISITORS, id, record.to_document()).await?;
    info!("added visitor {id} in week {week}");
    Ok(record)
}

/// Flips attendance for `week` based on the value currently stored.
pub async fn toggle_visitor(
    store: &dyn DocumentStore,
    id: &str,
    week: u32,
    stamp: &str,
) -> Result<AttendanceUpdate, VisitorError> {
    let doc = store
        .get(VISITORS, id)
        .await?
        .ok_or_else(|| VisitorError::NotFound(id.to_string()))?;
    let record = VisitorRecord::from_document(id, &doc);

    let update = toggle_attendance(&record, week, stamp);
    store.update(VISITORS, id, update.to_patch()).await?;
    info!(
        "visitor {id} marked {} for week {week}",
        if update.present { "present" } else { "absent" }
    );
    Ok(update)
}
