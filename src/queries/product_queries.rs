use crate::{
    error::{AppError, Result},
    models::{Product, UpdateProductRequest, clean_sizes},
    storage::{Document, FileStore},
    utils::clock,
};

pub async fn list_products(store: &FileStore) -> Result<Vec<Product>> {
    store.read(Document::Products, Vec::new).await
}

pub async fn find_by_id(store: &FileStore, id: i64) -> Result<Option<Product>> {
    let products = list_products(store).await?;

    Ok(products.into_iter().find(|product| product.id == id))
}

pub async fn create_product(
    store: &FileStore,
    name: String,
    image: String,
    sizes: Vec<String>,
) -> Result<Product> {
    store
        .update(Document::Products, Vec::new, |products: &mut Vec<Product>| {
            let product = Product {
                id: clock::next_id(products.iter().map(|p| p.id)),
                name,
                image,
                sizes: clean_sizes(sizes),
            };
            products.push(product.clone());
            Ok(product)
        })
        .await
}

pub async fn update_product(
    store: &FileStore,
    id: i64,
    update: UpdateProductRequest,
) -> Result<Product> {
    store
        .update(Document::Products, Vec::new, |products: &mut Vec<Product>| {
            let product = products
                .iter_mut()
                .find(|product| product.id == id)
                .ok_or_else(|| AppError::NotFound("Ürün bulunamadı".to_string()))?;

            product.apply(update);
            Ok(product.clone())
        })
        .await
}

pub async fn delete_product(store: &FileStore, id: i64) -> Result<Product> {
    store
        .update(Document::Products, Vec::new, |products: &mut Vec<Product>| {
            let index = products
                .iter()
                .position(|product| product.id == id)
                .ok_or_else(|| AppError::NotFound("Ürün bulunamadı".to_string()))?;

            Ok(products.remove(index))
        })
        .await
}
