use chrono::Utc;

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Timestamp-derived id, strictly greater than every id in `existing`.
pub fn next_id(existing: impl IntoIterator<Item = i64>) -> i64 {
    let now = now_millis();
    match existing.into_iter().max() {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}
