//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A product record is one:
/// two records with the same name, expiration date and price are interchangeable, and
/// nothing in the domain ever modifies a record after it has been built.
///
/// The trait requires:
/// - **Clone**: value objects are values, not references
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: u64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
