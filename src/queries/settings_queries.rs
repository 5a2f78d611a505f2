use crate::{
    error::Result,
    models::{Settings, SettingsPatch},
    storage::{Document, FileStore},
};

pub async fn get_settings(store: &FileStore) -> Result<Settings> {
    store.read(Document::Settings, Settings::default).await
}

pub async fn update_settings(store: &FileStore, patch: SettingsPatch) -> Result<Settings> {
    store
        .update(Document::Settings, Settings::default, |settings: &mut Settings| {
            settings.merge(patch);
            Ok(settings.clone())
        })
        .await
}
