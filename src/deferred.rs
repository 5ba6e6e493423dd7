//! Pattern 1: Deferred-Action Builder
//!
//! Configuration calls record mutation closures instead of touching a
//! record. `build` replays them, in recording order, onto a fresh
//! [`Person`] each time it is called.

use crate::person::Person;

/// One recorded mutation step.
///
/// `Fn` rather than `FnOnce`: the step sequence is replayed by every
/// `build` call.
pub type PersonModifier = Box<dyn Fn(&mut Person)>;

/// Accumulates [`PersonModifier`] steps and applies them on [`build`].
///
/// The step sequence is append-only; steps are never removed,
/// reordered, or deduplicated.
///
/// [`build`]: PersonBuilder::build
#[derive(Default)]
pub struct PersonBuilder {
    actions: Vec<PersonModifier>,
}

impl PersonBuilder {
    pub fn new() -> Self {
        PersonBuilder::default()
    }

    /// Records an arbitrary mutation step.
    ///
    /// The step runs once per `build` call, never at recording time.
    pub fn modify<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn(&mut Person) + 'static,
    {
        self.actions.push(Box::new(action));
        self
    }

    /// Records a step that assigns the name.
    pub fn called(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.modify(move |person| person.name = name.clone())
    }

    /// Records a single step that assigns address and city together.
    pub fn lives_at(
        &mut self,
        address: impl Into<String>,
        city: impl Into<String>,
    ) -> &mut Self {
        let address = address.into();
        let city = city.into();
        self.modify(move |person| {
            person.address = address.clone();
            person.city = city.clone();
        })
    }

    /// Creates a default [`Person`] and applies every recorded step in
    /// the order it was recorded (first recorded, first applied), so a
    /// later step overrides an earlier one on the same field.
    ///
    /// Each call starts from a fresh record; one builder can produce
    /// any number of independent `Person` values.
    pub fn build(&self) -> Person {
        let mut person = Person::default();
        for action in &self.actions {
            action(&mut person);
        }
        person
    }
}

// ============================================================================
// Unit tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn empty_builder_yields_default_person() {
        assert_eq!(PersonBuilder::new().build(), Person::default());
    }

    #[test]
    fn steps_do_not_run_until_build() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);

        let mut builder = PersonBuilder::new();
        builder.modify(move |person| {
            counter.set(counter.get() + 1);
            person.name = "deferred".to_string();
        });

        // Recording alone must not execute the step.
        assert_eq!(runs.get(), 0);

        let person = builder.build();
        assert_eq!(runs.get(), 1);
        assert_eq!(person.name, "deferred");

        // Every build replays the sequence again.
        builder.build();
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn later_step_wins_on_same_field() {
        let mut builder = PersonBuilder::new();
        builder.called("A").called("B");
        assert_eq!(builder.build().name, "B");
    }

    #[test]
    fn builds_are_independent() {
        let mut builder = PersonBuilder::new();
        builder.called("John Doe").lives_at("123 Main St", "Anytown");

        let first = builder.build();
        let mut second = builder.build();
        assert_eq!(first, second);

        second.city = "Elsewhere".to_string();
        assert_eq!(first.city, "Anytown");
    }

    #[test]
    fn chains_from_new_through_build() {
        let person = PersonBuilder::new()
            .called("John Doe")
            .lives_at("123 Main St", "Anytown")
            .build();

        assert_eq!(
            person,
            Person {
                name: "John Doe".to_string(),
                address: "123 Main St".to_string(),
                city: "Anytown".to_string(),
                ..Person::default()
            }
        );
    }

    #[test]
    fn modify_reaches_fields_without_named_setters() {
        let mut builder = PersonBuilder::new();
        builder
            .modify(|person| person.position = "Software Engineer".to_string())
            .modify(|person| person.income = 75000.0);

        let person = builder.build();
        assert_eq!(person.position, "Software Engineer");
        assert_eq!(person.income, 75000.0);
    }
}

// ============================================================================
// Property-based tests
// ============================================================================
