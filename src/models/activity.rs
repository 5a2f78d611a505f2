use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ProductAdded,
    ProductUpdated,
    ProductDeleted,
    SettingsUpdated,
    /// Stored entries with a missing or unrecognised `type`.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Stored entries are read leniently: a malformed entry must not make the
/// whole log unreadable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    pub id: i64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: ActivityKind,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Unix time in milliseconds.
    pub created_at: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(default)]
    pub message: String,
}

impl ActivityKind {
    pub fn is_known(&self) -> bool {
        *self != ActivityKind::Unknown
    }

    pub fn product_added(name: &str) -> (Self, String) {
        (ActivityKind::ProductAdded, format!("Yeni ürün eklendi: {}", name))
    }

    pub fn product_updated(name: &str) -> (Self, String) {
        (ActivityKind::ProductUpdated, format!("Ürün güncellendi: {}", name))
    }

    pub fn product_deleted(id: i64) -> (Self, String) {
        (ActivityKind::ProductDeleted, format!("Ürün silindi: {}", id))
    }

    pub fn settings_updated() -> (Self, String) {
        (
            ActivityKind::SettingsUpdated,
            "Site ayarları güncellendi".to_string(),
        )
    }
}
