//! Pattern 1: Deferred-Action Builder
//! Example: Recording Steps, Building Later
//!
//! Run with: cargo run --example p1_deferred_builder

use colored::Colorize;
use person_builder::deferred::PersonBuilder;

fn main() {
    println!("{}", "=== Deferred-Action Builder ===".bold());

    // Configuration calls only record closures; no Person exists yet.
    let mut builder = PersonBuilder::new();
    builder
        .called("John Doe")
        .lives_at("123 Main St", "Anytown");

    println!("Steps recorded; no record has been touched yet.");

    println!("\n{}", "Building person from the recorded steps...".cyan());
    let person = builder.build();

    println!("{} {:#?}", "Person built:".green(), person);

    println!("\n{}", "=== Arbitrary Steps via modify() ===".bold());
    let engineer = PersonBuilder::new()
        .called("Jane Roe")
        .modify(|p| p.position = "Software Engineer".to_string())
        .modify(|p| p.income = 75000.0)
        .build();

    println!("{} {:#?}", "Person built:".green(), engineer);
}
