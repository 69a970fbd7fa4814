use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use mongodb::bson::{self, Bson, Decimal128, Document, doc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::value_objects::{PriceRange, format_price};

/// Stored layout of a product. `id` is the application key; MongoDB's own
/// `_id` is left to the server and ignored on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub price: Decimal128,
    pub status: bool,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Result<Self, RepositoryError> {
        Ok(Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            quantity: i64::from(product.quantity),
            price: to_decimal128(&product.price)?,
            status: product.status,
            created_at: to_bson_datetime(product.created_at),
            updated_at: to_bson_datetime(product.updated_at),
        })
    }

    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let id = Uuid::parse_str(&self.id).map_err(RepositoryError::mapping)?;
        let quantity = u32::try_from(self.quantity).map_err(RepositoryError::mapping)?;
        let price = BigDecimal::from_str(&self.price.to_string())
            .map_err(|_| RepositoryError::mapping(format!("invalid price: {}", self.price)))?;

        Ok(Product::from_repository(
            id,
            self.name,
            quantity,
            price,
            self.status,
            from_bson_datetime(self.created_at)?,
            from_bson_datetime(self.updated_at)?,
        ))
    }
}

pub fn id_filter(id: Uuid) -> Document {
    doc! { "id": id.to_string() }
}

/// Builds the open-interval filter on `price`. An unbounded range matches every document.
pub fn price_filter(range: &PriceRange) -> Result<Document, RepositoryError> {
    let mut bounds = Document::new();
    if let Some(min) = &range.min {
        bounds.insert("$gt", to_decimal128(min)?);
    }
    if let Some(max) = &range.max {
        bounds.insert("$lt", to_decimal128(max)?);
    }

    let mut filter = Document::new();
    if !bounds.is_empty() {
        filter.insert("price", bounds);
    }
    Ok(filter)
}

/// Single-stage update pipeline setting only the provided fields.
///
/// `updated_at` becomes the later of `updated_at` and the stored value plus
/// one millisecond, so it advances even within the same millisecond. Values
/// go through `$literal` so a name starting with `$` is not read as a field path.
pub fn update_pipeline(
    changes: &ProductChanges,
    updated_at: DateTime<Utc>,
) -> Result<Vec<Document>, RepositoryError> {
    let mut set = doc! {
        "updated_at": {
            "$max": [to_bson_datetime(updated_at), { "$add": ["$updated_at", 1_i64] }]
        }
    };
    if let Some(name) = &changes.name {
        set.insert("name", literal(name.as_str()));
    }
    if let Some(quantity) = changes.quantity {
        set.insert("quantity", literal(i64::from(quantity)));
    }
    if let Some(price) = &changes.price {
        set.insert("price", literal(to_decimal128(price)?));
    }
    if let Some(status) = changes.status {
        set.insert("status", literal(status));
    }
    Ok(vec![doc! { "$set": set }])
}

fn literal(value: impl Into<Bson>) -> Document {
    doc! { "$literal": value.into() }
}

fn to_decimal128(value: &BigDecimal) -> Result<Decimal128, RepositoryError> {
    Decimal128::from_str(&format_price(value))
        .map_err(|_| RepositoryError::mapping(format!("price out of decimal128 range: {value}")))
}

fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

fn from_bson_datetime(value: bson::DateTime) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::from_timestamp_millis(value.timestamp_millis())
        .ok_or_else(|| RepositoryError::mapping(format!("invalid timestamp: {value}")))
}
