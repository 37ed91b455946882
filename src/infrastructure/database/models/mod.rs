pub mod product_model;

pub use product_model::ProductModel;
