use anyhow::Result;
use clap::Parser;
use dircmp::areas::comparison::Comparison;
use dircmp::artifacts::diff::diff_entry::DiffFilter;

#[derive(Parser)]
#[command(
    name = "dircmp",
    version = "0.1.0",
    about = "Compare two directory trees",
    long_about = "Recursively compares two directory trees and classifies every path \
    as added, deleted, modified or same relative to the left tree. \
    Useful for auditing deployments, verifying backups, or inspecting build outputs.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The reference tree (left side)")]
    left: String,
    #[arg(index = 2, help = "The tree to compare against the reference (right side)")]
    right: String,
    #[arg(
        short = 's',
        long,
        conflicts_with = "filter",
        help = "Hide entries that are identical on both sides"
    )]
    hide_same: bool,
    #[arg(
        long,
        value_name = "KINDS",
        help = "Show only entries of the given kinds (letters A, D, M, S)"
    )]
    filter: Option<String>,
    #[arg(long, help = "Disable colored output")]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let filter = match &cli.filter {
        Some(letters) => DiffFilter::try_parse(letters).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid diff filter {:?} (expected letters A, D, M, S)",
                letters
            )
        })?,
        None if cli.hide_same => DiffFilter::all() - DiffFilter::SAME,
        None => DiffFilter::all(),
    };

    let comparison = Comparison::new(
        &cli.left,
        &cli.right,
        Box::new(std::io::stdout()),
        Box::new(std::io::stderr()),
    )?;

    comparison.run(filter)
}
