use bigdecimal::BigDecimal;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub price: BigDecimal,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub quantity: u32,
    pub price: BigDecimal,
    pub status: bool,
}

/// Fields a partial update may touch. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<BigDecimal>,
    pub status: Option<bool>,
}

/// Current UTC time truncated to milliseconds, the resolution the store keeps.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        let now = current_timestamp();
        Self {
            id: Uuid::new_v4(),
            name: props.name,
            quantity: props.quantity,
            price: props.price,
            status: props.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no defaults applied).
    pub fn from_repository(
        id: Uuid,
        name: String,
        quantity: u32,
        price: BigDecimal,
        status: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            price,
            status,
            created_at,
            updated_at,
        }
    }

    /// Merges the provided fields. `updated_at` always moves forward, at least
    /// one millisecond past the stored value.
    pub fn apply_changes(&mut self, changes: &ProductChanges, updated_at: DateTime<Utc>) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = &changes.price {
            self.price = price.clone();
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        self.updated_at = updated_at.max(self.updated_at + Duration::milliseconds(1));
    }
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.status.is_none()
    }
}
