use crate::models::Product;

/// The fixed catalogue every fresh store starts with.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            product_id: 1,
            product_name: "Firefighter Wallet".to_string(),
            inventory_scanning_id: 1,
            color: "Tan".to_string(),
            price: 30.0,
            dimensions: "3 1/2\" tall and 4 1/2\" long".to_string(),
            sku: 1,
            ..Default::default()
        },
        Product {
            product_id: 2,
            product_name: "Firefighter Apron".to_string(),
            inventory_scanning_id: 2,
            color: "Tan".to_string(),
            size: "One Size Fits All".to_string(),
            price: 29.0,
            dimensions: "31\" tall and 26\" wide and ties around a waist up to 54\"".to_string(),
            sku: 2,
        },
        Product {
            product_id: 3,
            product_name: "Firefighter Baby Outfit".to_string(),
            inventory_scanning_id: 3,
            color: "Tan".to_string(),
            size: "Newborn".to_string(),
            price: 39.99,
            dimensions: "Waist-14\", Length-10\"".to_string(),
            sku: 3,
        },
    ]
}
