use colored::*;
use expectations_core::{ExpectationResult, ValidationReport};

pub fn print_validation_report(report: &ValidationReport, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.success {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    println!();
    for result in &report.results {
        print_expectation_line(result);
    }

    let stats = &report.statistics;
    println!("\n{}", "Summary:".bold());
    println!("  Evaluated:  {}", stats.evaluated_expectations);
    println!("  Passed:     {}", stats.successful_expectations);
    println!("  Failed:     {}", stats.unsuccessful_expectations);
    println!("  Success:    {:.1}%", stats.success_percent);
    println!("{}", "═".repeat(60));
}

fn print_expectation_line(result: &ExpectationResult) {
    let mark = if result.success {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    };
    let target = match result.expectation_config.kind.column() {
        Some(column) => format!("{} [{}]", result.expectation_config.kind.name(), column),
        None => result.expectation_config.kind.name().to_string(),
    };

    let detail = &result.result;
    if let Some(error) = &detail.error {
        println!("  {} {} {}", mark, target, format!("({})", error).red());
    } else if let Some(observed) = detail.observed_value {
        println!("  {} {} (observed {})", mark, target, observed);
    } else if let (Some(unexpected), Some(percent)) =
        (detail.unexpected_count, detail.unexpected_percent)
    {
        if unexpected > 0 {
            println!(
                "  {} {} ({} unexpected, {:.1}%)",
                mark, target, unexpected, percent
            );
        } else {
            println!("  {} {}", mark, target);
        }
    } else {
        println!("  {} {}", mark, target);
    }
}

fn print_json_report(report: &ValidationReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(error) => eprintln!("Failed to serialize report: {}", error),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
