//! Pattern 2: Fluent Sub-Builders
//! Example: Grouped Fields via Address and Job Builders
//!
//! Run with: cargo run --example p2_fluent_subbuilders

use colored::Colorize;
use person_builder::fluent::PersonBuilder;

fn main() {
    println!("{}", "=== Fluent Sub-Builders ===".bold());

    // lives() and works() open sub-scopes; in_city() and earning()
    // hand control back to the parent builder.
    let person = PersonBuilder::new()
        .called("John Doe")
        .lives()
        .at("123 Main St")
        .with_postcode("12345")
        .in_city("Anytown")
        .works()
        .as_a("Software Engineer")
        .earning(75000.0)
        .build();

    println!("{} {:#?}", "Person built:".green(), person);

    println!("\n{}", "=== Partial Groups ===".bold());
    let person = PersonBuilder::new()
        .called("Jane Roe")
        .lives()
        .at("42 Side St")
        .in_city("Smalltown")
        .build();

    println!("No postcode set inside the address group:");
    println!("{:#?}", person);
}
