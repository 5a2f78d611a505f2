pub mod activity_queries;
pub mod product_queries;
pub mod settings_queries;
