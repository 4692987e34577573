//! Products domain module.
//!
//! This crate contains the product record and the outdated-product filter,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! "Today" always comes from an injected [`shelfwatch_core::Clock`].

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, outdated_products, outdated_products_with};
pub use product::Product;
