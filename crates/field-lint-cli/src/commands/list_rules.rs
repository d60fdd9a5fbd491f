//! List rules command implementation.

use field_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - FT001, FT003 (default)");
    println!("  strict       - FT001, FT002, FT003, all at error severity");
    println!("  all          - FT001, FT002, FT003 at default severities");

    println!("\nTarget classes default to the suffixes Form, ContentResult, Part.");
    println!("Use --rules to filter specific rules, e.g.:");
    println!("  field-lint check --rules no-primitive-fields,no-raw-collections");
    println!("  field-lint check --rules FT001,FT002");
}
