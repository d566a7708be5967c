use numphrase::{latin_power_name, FractionMode, Numerals};

const MODES: [(&str, FractionMode); 3] = [
    ("default", FractionMode::Default),
    ("simple", FractionMode::Simple),
    ("fancy", FractionMode::Fancy),
];

/// Spell a number out in every fraction mode and check each phrase reads back
fn show_number(numerals: &Numerals, input: &str) {
    let canonical = match numerals.normalize_number_string(input) {
        Ok(canonical) => canonical,
        Err(e) => {
            println!("  {input:?}: {e}\n");
            return;
        }
    };
    println!("  {input} ({canonical}) ->");
    for (name, mode) in MODES {
        let Ok(phrase) = numerals.number_to_phrase_with(input, mode) else {
            continue;
        };
        let status = match numerals.phrase_to_number(&phrase) {
            Ok(back) if back == canonical => "✓".to_string(),
            Ok(back) => format!("✗ read back as {back}"),
            Err(e) => format!("✗ {e}"),
        };
        println!("    {name:>7}: {phrase} {status}");
    }
    if let Ok(exponential) = numerals.number_to_exponential_phrase(input) {
        println!("    {:>7}: {exponential}", "exp");
    }
    println!();
}

fn show_phrase(numerals: &Numerals, phrase: &str) {
    match numerals.phrase_to_number(phrase) {
        Ok(number) => println!("  {phrase:?} -> {number}"),
        Err(e) => println!("  {phrase:?} -> error: {e}"),
    }
}

fn looks_numeric(arg: &str) -> bool {
    arg.trim_start_matches(['-', '+'])
        .starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn main() {
    let numerals = Numerals::default();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if !args.is_empty() {
        for arg in &args {
            if looks_numeric(arg) {
                show_number(&numerals, arg);
            } else {
                show_phrase(&numerals, arg);
            }
        }
        return;
    }

    println!("=== Numbers to Phrases ===\n");
    let numbers = ["0", "-5", "42", "1234", "3.14", "0.05", "1.1234567", "1000000.000001"];
    for number in numbers {
        show_number(&numerals, number);
    }

    println!("=== Exponential Fallback ===\n");
    let big = format!("15{}", "0".repeat(69));
    for number in [big.as_str(), "-1E-70", "6.02214076E23"] {
        show_number(&numerals, number);
    }

    println!("=== Phrases to Numbers ===\n");
    let phrases = [
        "twelve hundred",
        "nineteen oh hundred",
        "Thirty-Four Thousand, Five Hundred",
        "minus one point five million",
        "250 thousand",
        "three and five tenths",
        "one hundred twenty three thousandths",
        "one point five exponent seventy",
        "one two",
        "one gazillion",
    ];
    for phrase in phrases {
        show_phrase(&numerals, phrase);
    }

    println!("\n=== Latin Powers ===\n");
    for power in [1, 9, 10, 11, 20, 100, 101, 999, 1000, 1001, 1_000_000] {
        println!("  {power:>9} -> {}", latin_power_name(power));
    }

    println!("\n=== Demo Complete ===");
}
