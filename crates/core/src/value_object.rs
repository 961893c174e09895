//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. A record's price or quantity is a
//! value object; the record itself is an entity (see [`crate::Entity`]).

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, construct a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
