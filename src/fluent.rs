//! Pattern 2: Fluent Sub-Builders
//!
//! Related fields are grouped behind secondary builders. A sub-builder
//! borrows the parent, fills its group, and hands the parent back from
//! its completion method.

use crate::person::Person;

/// Assembles a [`Person`] through grouped, eagerly applied setters.
#[derive(Default)]
pub struct PersonBuilder {
    person: Person,
}

/// Address group. Opened by [`PersonBuilder::lives`]; closed by
/// [`AddressBuilder::in_city`], which returns the parent.
pub struct AddressBuilder<'a> {
    parent: &'a mut PersonBuilder,
}

/// Job group. Opened by [`PersonBuilder::works`]; closed by
/// [`JobBuilder::earning`].
pub struct JobBuilder<'a> {
    parent: &'a mut PersonBuilder,
}

impl PersonBuilder {
    pub fn new() -> Self {
        PersonBuilder::default()
    }

    pub fn called(&mut self, name: impl Into<String>) -> &mut Self {
        self.person.name = name.into();
        self
    }

    /// Opens the address group.
    pub fn lives(&mut self) -> AddressBuilder<'_> {
        AddressBuilder { parent: self }
    }

    /// Opens the job group.
    pub fn works(&mut self) -> JobBuilder<'_> {
        JobBuilder { parent: self }
    }

    /// Returns a copy of the accumulated record; the builder stays
    /// usable afterwards.
    pub fn build(&self) -> Person {
        self.person.clone()
    }
}

// Methods that stay inside a group take and return `self` by value, so
// the borrow of the parent rides along the chain. Completion methods
// give the parent borrow back, closing the sub-scope.

impl<'a> AddressBuilder<'a> {
    pub fn at(self, address: impl Into<String>) -> Self {
        self.parent.person.address = address.into();
        self
    }

    pub fn with_postcode(self, postcode: impl Into<String>) -> Self {
        self.parent.person.postcode = postcode.into();
        self
    }

    /// Completes the address group and returns the parent builder.
    pub fn in_city(self, city: impl Into<String>) -> &'a mut PersonBuilder {
        self.parent.person.city = city.into();
        self.parent
    }
}

impl<'a> JobBuilder<'a> {
    pub fn as_a(self, position: impl Into<String>) -> Self {
        self.parent.person.position = position.into();
        self
    }

    /// Completes the job group and returns the parent builder.
    pub fn earning(self, income: f64) -> &'a mut PersonBuilder {
        self.parent.person.income = income;
        self.parent
    }
}
