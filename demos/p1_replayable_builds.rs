//! Pattern 1: Deferred-Action Builder
//! Example: Replayed, Independent Builds
//!
//! Run with: cargo run --example p1_replayable_builds

use colored::Colorize;
use person_builder::deferred::PersonBuilder;

fn main() {
    println!("{}", "=== One Builder, Many Records ===".bold());

    let mut builder = PersonBuilder::new();
    builder.called("John Doe").lives_at("123 Main St", "Anytown");

    // Each build replays the same steps onto a fresh record.
    let first = builder.build();
    let mut second = builder.build();

    println!("First:  {:?}", first);
    println!("Second: {:?}", second);
    println!("Field-wise equal: {}", (first == second).to_string().green());

    second.city = "Elsewhere".to_string();
    println!("\nAfter mutating the second record:");
    println!("First city:  {}", first.city);
    println!("Second city: {}", second.city);

    println!("\n{}", "=== Later Steps Override Earlier Ones ===".bold());
    let renamed = PersonBuilder::new().called("A").called("B").build();
    println!("called(\"A\").called(\"B\") -> name = {}", renamed.name.green());

    println!("\n{}", "=== Empty Builder ===".bold());
    let blank = PersonBuilder::new().build();
    println!("No steps recorded -> all fields default: {:?}", blank);
}
