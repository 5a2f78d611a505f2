use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sizes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub sizes: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub sizes: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl Product {
    pub fn apply(&mut self, update: UpdateProductRequest) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(sizes) = update.sizes {
            self.sizes = clean_sizes(sizes);
        }
    }
}

/// Drops blank and whitespace-only size labels, keeping order.
pub fn clean_sizes(sizes: Vec<String>) -> Vec<String> {
    sizes
        .into_iter()
        .filter(|size| !size.trim().is_empty())
        .collect()
}

pub const STANDARD_SIZES: &[&str] = &[
    "40x60", "50x60", "50x70", "50x80", "60x100", "65x120", "80x125", "80x150", "80x200",
    "80x300", "100x150", "100x200", "100x300", "120x180", "140x200", "160x230", "160x250",
    "180x280", "200x300",
];
