use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::value_objects::{format_price, is_representable_price};

use crate::api::error::ErrorResponse;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (unique, cannot be empty)
    #[oai(validator(min_length = 1))]
    pub name: String,
    /// Units in stock
    pub quantity: u32,
    /// Unit price as a decimal string, e.g. "8.500"
    pub price: String,
    /// Whether the product is active
    pub status: bool,
}

/// Partial update; omitted or null fields keep their stored value.
#[derive(Debug, Clone, Default, Object)]
pub struct UpdateProductRequest {
    /// Product name (unique, cannot be empty)
    #[oai(validator(min_length = 1))]
    pub name: Option<String>,
    /// Units in stock
    pub quantity: Option<u32>,
    /// Unit price as a decimal string
    pub price: Option<String>,
    /// Whether the product is active
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Units in stock
    pub quantity: u32,
    /// Unit price as a decimal string
    pub price: String,
    /// Whether the product is active
    pub status: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            price: format_price(&product.price),
            status: product.status,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl TryFrom<CreateProductRequest> for CreateProductParams {
    type Error = ErrorResponse;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: request.name,
            quantity: request.quantity,
            price: parse_price(&request.price)?,
            status: request.status,
        })
    }
}

impl TryFrom<UpdateProductRequest> for ProductChanges {
    type Error = ErrorResponse;

    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: request.name,
            quantity: request.quantity,
            price: request.price.as_deref().map(parse_price).transpose()?,
            status: request.status,
        })
    }
}

/// Parses a decimal string, rejecting values the store cannot keep exactly.
pub fn parse_price(raw: &str) -> Result<BigDecimal, ErrorResponse> {
    BigDecimal::from_str(raw.trim())
        .ok()
        .filter(is_representable_price)
        .ok_or_else(|| ErrorResponse::new(format!("Invalid decimal value: {raw}")))
}

pub fn parse_id(raw: &str) -> Result<Uuid, ErrorResponse> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::new(format!("Invalid product id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_price_scale_in_response() {
        let product = Product::new(business::domain::product::model::NewProductProps {
            name: "Iphone 14 Pro Max".to_string(),
            quantity: 10,
            price: parse_price("8.500").unwrap(),
            status: true,
        });

        let response = ProductResponse::from(product);

        assert_eq!(response.price, "8.500");
    }

    #[test]
    fn should_keep_exponent_notation_in_response() {
        let product = Product::new(business::domain::product::model::NewProductProps {
            name: "Monitor".to_string(),
            quantity: 1,
            price: parse_price("1E+3").unwrap(),
            status: true,
        });

        assert_eq!(ProductResponse::from(product).price, "1E+3");
    }

    #[test]
    fn should_reject_non_decimal_price() {
        let err = parse_price("eight").unwrap_err();
        assert_eq!(err.detail, "Invalid decimal value: eight");
    }

    #[test]
    fn should_reject_price_beyond_store_precision() {
        let raw = "12345678901234567890123456789012345678";
        let err = parse_price(raw).unwrap_err();
        assert_eq!(err.detail, format!("Invalid decimal value: {raw}"));
    }

    #[test]
    fn should_leave_absent_fields_untouched() {
        let changes = ProductChanges::try_from(UpdateProductRequest {
            price: Some("7.500".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(changes.price.unwrap().to_string(), "7.500");
        assert!(changes.name.is_none());
        assert!(changes.quantity.is_none());
        assert!(changes.status.is_none());
    }
}
