//! Inventory domain module.
//!
//! This crate contains the fixed-capacity backpack and its item types,
//! implemented purely as deterministic domain logic (no IO, no console).

pub mod backpack;
pub mod item;

pub use backpack::{
    AddItem, Backpack, BackpackCommand, BackpackEvent, ItemAdded, ItemRemoved, RemoveItem,
    CAPACITY,
};
pub use item::{Category, Item, ItemName, Quantity};
