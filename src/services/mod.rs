mod category_service;
mod product_service;

pub use category_service::{CATEGORIES_COLLECTION, CategoryService, MongoCategories};
pub use product_service::{MongoProducts, PRODUCTS_COLLECTION, ProductService};
