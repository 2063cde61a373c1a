use clap::Parser;
use oxidized_frontmatter::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "oxidized-frontmatter",
    version,
    about = "Validate YAML frontmatter in governed markdown docs",
    after_help = "Exit codes:\n  0  all files pass\n  1  validation errors found, or the path does not exist"
)]
pub struct Cli {
    /// Directory or file to check
    #[arg(default_value = "docs")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, short, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List all rules and exit
    #[arg(long)]
    pub list_rules: bool,
}
