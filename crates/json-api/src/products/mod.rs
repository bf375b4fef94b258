//! Products

pub(crate) mod categories;
pub(crate) mod index;
mod models;

pub(crate) use models::ProductResponse;

#[cfg(test)]
pub(crate) mod tests {
    use storefront::products::Product;

    pub(crate) fn make_product(id: &str, category: &str, price: u64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price,
            image: format!("https://example.com/{id}.jpg"),
            description: "A product".to_string(),
            category: category.to_string(),
            rating: 4.5,
            reviews: 10,
        }
    }
}
