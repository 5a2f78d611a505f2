use crate::{
    error::Result,
    models::{Activity, ActivityKind},
    storage::{Document, FileStore},
    utils::clock,
};

/// Newest first. Entries are prepended on write, but the stored order is not
/// trusted.
pub async fn list_activity(store: &FileStore) -> Result<Vec<Activity>> {
    let mut items: Vec<Activity> = store.read(Document::Activity, Vec::new).await?;
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(items)
}

pub async fn recent_activity(store: &FileStore, limit: usize) -> Result<Vec<Activity>> {
    let mut items = list_activity(store).await?;
    items.truncate(limit);

    Ok(items)
}

pub async fn record_activity(
    store: &FileStore,
    kind: ActivityKind,
    message: String,
) -> Result<Activity> {
    store
        .update(Document::Activity, Vec::new, |items: &mut Vec<Activity>| {
            let item = Activity {
                id: clock::next_id(items.iter().map(|item| item.id)),
                kind,
                message,
                created_at: clock::now_millis(),
            };
            items.insert(0, item.clone());
            Ok(item)
        })
        .await
}
