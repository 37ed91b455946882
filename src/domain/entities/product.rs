use serde::{Deserialize, Serialize};

/// A single catalog entry as loaded from the product CSV.
///
/// Rows are immutable after the bulk load; re-ingestion replaces the whole
/// table rather than updating individual records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    img_id: String,
    gender: String,
    master_category: String,
    sub_category: String,
    article_type: String,
    base_colour: String,
    season: String,
    year: Option<i32>,
    usage: Option<String>,
    product_display_name: Option<String>,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        img_id: String,
        gender: String,
        master_category: String,
        sub_category: String,
        article_type: String,
        base_colour: String,
        season: String,
        year: Option<i32>,
        usage: Option<String>,
        product_display_name: Option<String>,
    ) -> Self {
        Self {
            img_id,
            gender,
            master_category,
            sub_category,
            article_type,
            base_colour,
            season,
            year,
            usage,
            product_display_name,
        }
    }

    pub fn img_id(&self) -> &str {
        &self.img_id
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn master_category(&self) -> &str {
        &self.master_category
    }

    pub fn sub_category(&self) -> &str {
        &self.sub_category
    }

    pub fn article_type(&self) -> &str {
        &self.article_type
    }

    pub fn base_colour(&self) -> &str {
        &self.base_colour
    }

    pub fn season(&self) -> &str {
        &self.season
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    pub fn product_display_name(&self) -> Option<&str> {
        self.product_display_name.as_deref()
    }

    /// Display name with the image id as a fallback for rows where the CSV
    /// carried no name.
    pub fn display_name_or_id(&self) -> &str {
        self.product_display_name
            .as_deref()
            .unwrap_or(&self.img_id)
    }
}
