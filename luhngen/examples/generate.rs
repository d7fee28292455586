// Pattern-driven card generation example

// Generates a few batches of Luhn-valid test cards from each accepted
// pattern form and prints them in `number|MM|YY|CVV` form.
//
// Run with `RUST_LOG=debug cargo run --example generate -- 483318xxxx 5`.

use luhngen::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let patterns = match args.next() {
        Some(p) => vec![p],
        None => vec![
            "483318".to_string(),
            "483318|12|25|123".to_string(),
            "439383xxxxxx".to_string(),
            "4393830123456789".to_string(),
        ],
    };
    let count = match args.next() {
        Some(n) => n.parse()?,
        None => 3,
    };

    let generator = CardGenerator::builder().default_count(count).build()?;

    for pattern in &patterns {
        println!("Pattern: {}", pattern);
        match generator.generate_default(pattern) {
            Ok(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    println!("  {}. {}", i + 1, card);
                }
            }
            Err(e) if e.is_validation() => println!("  rejected: {}", e),
            Err(e) => return Err(e.into()),
        }
        println!();
    }

    Ok(())
}
