//! Catalog sequence and the outdated-product filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shelfwatch_core::Clock;

use crate::product::Product;

/// Names of every product that expired strictly before `today`, in catalog order.
///
/// Pure: the catalog is only read, and the result is a fresh vector.
pub fn outdated_products(catalog: &[Product], today: NaiveDate) -> Vec<String> {
    catalog
        .iter()
        .filter(|product| product.is_outdated(today))
        .map(|product| product.name().to_owned())
        .collect()
}

/// Same as [`outdated_products`], with "today" taken from `clock`.
///
/// The clock is read once per call.
pub fn outdated_products_with<C: Clock + ?Sized>(catalog: &[Product], clock: &C) -> Vec<String> {
    let today = clock.today();
    let names = outdated_products(catalog, today);

    tracing::debug!(
        %today,
        catalog_size = catalog.len(),
        outdated = names.len(),
        "filtered outdated products"
    );

    names
}

/// Ordered collection of products.
///
/// Order is insertion order and is what the filter preserves. Duplicate
/// names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    /// Names of the products outdated as of `clock.today()`.
    pub fn outdated_products<C: Clock + ?Sized>(&self, clock: &C) -> Vec<String> {
        outdated_products_with(&self.products, clock)
    }

    /// The outdated records themselves, in catalog order.
    pub fn outdated(&self, today: NaiveDate) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.is_outdated(today))
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

impl AsRef<[Product]> for Catalog {
    fn as_ref(&self) -> &[Product] {
        &self.products
    }
}
