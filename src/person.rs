//! The record both builder variants assemble.

/// A plain aggregate of independently settable fields.
///
/// No invariants relate the fields to one another; any subset may stay
/// at its default value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub position: String,
    pub income: f64,
}
