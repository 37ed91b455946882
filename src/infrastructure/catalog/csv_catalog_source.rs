use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::application::ports::catalog_source::{CatalogSource, CatalogSourceError};
use crate::domain::entities::Product;

/// Reads the fixed-schema product CSV shipped with the image bucket.
///
/// Column order:
/// `id,gender,masterCategory,subCategory,articleType,baseColour,season,year,usage,productDisplayName`
/// The header row is always skipped. `year` is parsed leniently (a blank or
/// non-numeric value becomes `None`); blank `usage`/display-name fields
/// become `None` as well.
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_from<R: Read>(reader: R) -> Result<Vec<Product>, CatalogSourceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut products = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record.map_err(|e| CatalogSourceError::MalformedRow(e.to_string()))?;
            products.push(Self::parse_record(&record, index + 2)?);
        }

        Ok(products)
    }

    fn parse_record(
        record: &csv::StringRecord,
        line: usize,
    ) -> Result<Product, CatalogSourceError> {
        if record.len() < 10 {
            return Err(CatalogSourceError::MalformedRow(format!(
                "line {}: expected 10 fields, found {}",
                line,
                record.len()
            )));
        }

        let field = |i: usize| record.get(i).unwrap_or("").trim().to_string();
        let optional = |i: usize| {
            let value = field(i);
            (!value.is_empty()).then_some(value)
        };

        Ok(Product::new(
            field(0),
            field(1),
            field(2),
            field(3),
            field(4),
            field(5),
            field(6),
            field(7).parse::<i32>().ok(),
            optional(8),
            optional(9),
        ))
    }
}

impl CatalogSource for CsvCatalogSource {
    fn read_catalog(&self) -> Result<Vec<Product>, CatalogSourceError> {
        let file = File::open(&self.path).map_err(|e| {
            CatalogSourceError::IoError(format!("{}: {}", self.path.display(), e))
        })?;

        Self::read_from(file)
    }
}
