mod category;
mod product;
mod wire;

pub use category::Category;
pub use product::{ImageProduct, Product};
