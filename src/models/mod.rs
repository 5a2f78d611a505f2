mod activity;
mod admin;
mod product;
mod settings;

pub use activity::*;
pub use admin::*;
pub use product::*;
pub use settings::*;
