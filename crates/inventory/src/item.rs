use core::str::FromStr;

use serde::{Deserialize, Serialize};

use kitbag_core::{BoundedText, DomainError, ValueObject};

/// Item name, at most 49 characters.
pub type ItemName = BoundedText<49>;

/// Item category ("type" in the menu), at most 19 characters.
pub type Category = BoundedText<19>;

/// Quantity held in a slot. Any `i32` is accepted, negatives included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(pub i32);

impl ValueObject for Quantity {}

impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|e| DomainError::validation(format!("invalid quantity '{}': {e}", s.trim())))
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One occupied inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: ItemName,
    category: Category,
    quantity: Quantity,
}

impl Item {
    pub fn new(
        name: impl Into<ItemName>,
        category: impl Into<Category>,
        quantity: impl Into<Quantity>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
        }
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}
