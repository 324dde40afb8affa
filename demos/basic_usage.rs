// ============================================================================
// Basic Usage Example
// ============================================================================

use num_humanize::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Number Formatting Example ===\n");

    let ru = HumanFormatterBuilder::ru_ru().build().unwrap();
    let en = HumanFormatterBuilder::en_us().build().unwrap();
    let unit = DecimalSpec::unit_default();

    println!("Unit wrappers (ru-RU):");
    for value in [0.0, 1.0654, 1654.0, 16504.234, 254_854_564.0, -254_854_564.0] {
        println!("  {:>20} -> {}", value, ru.human_abbr(value, unit));
    }
    println!("  {:>20} -> {}", 16565404.0000234, ru.human_k(16565404.0000234, unit));
    println!("  {:>20} -> {}", 2548545641111999.0, ru.human_short(2548545641111999.0, unit));

    println!("\nPolicies on 2.00000231:");
    for spec in ["2 smart", "2 fixed", "2 flex", "2 unknown"] {
        let spec: DecimalSpec = spec.parse().unwrap();
        println!("  {:>10} -> {}", spec.to_string(), ru.human_k(2.00000231, spec));
    }

    println!("\nSmart precision (en-US):");
    for value in [0.0000000013, 0.000111, 1.000111, 2.999951132432, 23.54] {
        println!("  {:>16} -> {}", value, en.smart(value, 2));
    }

    println!("\nCustom units:");
    let bytes = UnitTable::new(["KB", "MB", "GB", "TB", "PB"]).unwrap();
    for value in [512.0, 1_536_000.0, 7.2e12] {
        println!(
            "  {:>16} -> {}",
            value,
            en.human_with(value, DecimalSpec::flex(2), &bytes, SuffixJoin::Spaced)
        );
    }

    println!("\nGerman words:");
    let german: Catalog = [
        ("thousand", "Tsd."),
        ("million", "Mio."),
        ("billion", "Mrd."),
        ("trillion", "Bio."),
        ("quadrillion", "Brd."),
    ]
    .into_iter()
    .collect();
    let de = HumanFormatterBuilder::de_de()
        .translator(std::sync::Arc::new(german))
        .build()
        .unwrap();
    for value in [1654.0, 3_400_000.0, 2.5e9] {
        println!("  {:>16} -> {}", value, de.human_abbr_default(value));
    }

    println!("\nRejected spec: {:?}", "-1 fixed".parse::<DecimalSpec>());
}
