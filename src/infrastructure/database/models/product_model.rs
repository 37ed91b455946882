use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;
use crate::infrastructure::database::schema::products;

#[derive(Debug, Clone, Queryable, Selectable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductModel {
    pub img_id: String,
    pub gender: String,
    pub master_category: String,
    pub sub_category: String,
    pub article_type: String,
    pub base_colour: String,
    pub season: String,
    pub year: Option<i32>,
    pub usage: Option<String>,
    pub product_display_name: Option<String>,
}

impl From<&Product> for ProductModel {
    fn from(product: &Product) -> Self {
        Self {
            img_id: product.img_id().to_string(),
            gender: product.gender().to_string(),
            master_category: product.master_category().to_string(),
            sub_category: product.sub_category().to_string(),
            article_type: product.article_type().to_string(),
            base_colour: product.base_colour().to_string(),
            season: product.season().to_string(),
            year: product.year(),
            usage: product.usage().map(|s| s.to_string()),
            product_display_name: product.product_display_name().map(|s| s.to_string()),
        }
    }
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product::new(
            model.img_id,
            model.gender,
            model.master_category,
            model.sub_category,
            model.article_type,
            model.base_colour,
            model.season,
            model.year,
            model.usage,
            model.product_display_name,
        )
    }
}
