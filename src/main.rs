mod cli;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use oxidized_frontmatter::{check, config, output, rules};

fn main() {
    let cli = Cli::parse();

    if cli.list_rules {
        print_rules();
        return;
    }

    let target = check::normalize_target(&cli.path);
    if !target.exists() {
        eprintln!("Error: {} does not exist", target.display());
        std::process::exit(1);
    }

    let config = config::Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let report = check::run_check(&target, &config);
    let formatted = output::format_report(&report, &cli.format);

    if let Some(out_path) = cli.output {
        std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
            eprintln!("Error writing output: {e}");
            std::process::exit(1);
        });
        eprintln!("Output written to {}", out_path.display());
    } else {
        print!("{formatted}");
    }

    std::process::exit(if report.passed { 0 } else { 1 });
}

fn print_rules() {
    let rules = rules::all_rules();
    println!("{}", "Built-in Rules".bold().underline());
    println!();

    for rule in &rules {
        println!(
            "  [{kind:<12}] {id:<34} {message}",
            kind = rule.kind.to_string(),
            id = rule.id,
            message = rule.message,
        );
        println!("  {:<15}{}", "", rule.remediation.dimmed());
    }

    println!();
    println!("  Total: {} rules", rules.len());
}
