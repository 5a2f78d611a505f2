mod file_store;

pub use file_store::{Document, FileStore, open};
