//! List rules command implementation.

use style_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<28} {:<10} {:<9} Description", "Id", "Family", "Severity");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        println!(
            "{:<28} {:<10} {:<9} {}",
            rule.id, rule.family, rule.severity, rule.description
        );
    }

    println!("\nUse --rules to run specific rules, e.g.:");
    println!("  style-lint check --rules backend/class-naming,frontend/unused-variable");
    println!("\nSuppress a finding with a comment on the same line or the line above:");
    println!("  // style-lint: allow(frontend/unused-variable) reason=\"kept for debugging\"");
}
