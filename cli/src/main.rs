//! mathpdf CLI - PDF math problem extraction tool

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;

use mathpdf::{ExtractOptions, ProblemCollection, ProblemExtractor};

#[derive(Parser)]
#[command(name = "mathpdf")]
#[command(version)]
#[command(about = "Extract math problems from PDF files into structured JSON", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "PDF")]
    input: PathBuf,

    /// Output JSON file
    #[arg(value_name = "JSON")]
    output: PathBuf,

    /// Problem number to start extracting from
    #[arg(long, value_name = "N", default_value_t = 1)]
    start_problem: u32,

    /// Existing JSON file to merge with
    #[arg(long, value_name = "FILE")]
    existing: Option<PathBuf>,

    /// Also write a sample file with the first N problems
    #[arg(long, value_name = "N")]
    sample: Option<usize>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Extracting text...");
    let text = mathpdf::pdf::extract_text(&cli.input)?;
    pb.inc(1);

    pb.set_message("Parsing problems...");
    let options = ExtractOptions::new().with_start_problem(cli.start_problem);
    let new_problems = ProblemExtractor::new(options).extract_from_text(&text)?;
    let new_count = new_problems.len();
    pb.inc(1);

    pb.set_message("Merging...");
    let collection =
        ProblemCollection::load_or_default(cli.existing.as_deref()).merge(new_problems);
    pb.inc(1);

    pb.set_message("Writing JSON...");
    collection.save(&cli.output)?;

    if let Some(n) = cli.sample {
        // A failed sample write is a warning, never a failed run.
        match collection.save_sample(&cli.output, n) {
            Ok(path) => println!(
                "{} {} ({} problems)",
                "Sample file:".green(),
                path.display(),
                n.min(collection.len())
            ),
            Err(e) => warn!("could not write sample file: {}", e),
        }
    }
    pb.inc(1);
    pb.finish_with_message("Done!");

    print_summary(&collection, new_count);
    Ok(())
}

fn print_summary(collection: &ProblemCollection, new_count: usize) {
    println!("\n{}", "Pipeline completed successfully".green().bold());
    println!("{}: {}", "Total problems".bold(), collection.len());
    println!("{}: {}", "New problems".bold(), new_count);

    let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
    for record in collection.records() {
        *categories.entry(record.category.as_str()).or_default() += 1;
    }

    println!("{}:", "Categories".bold());
    for (category, count) in categories {
        println!("  {} {}", format!("{}:", category).dimmed(), count);
    }
}
