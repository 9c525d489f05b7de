use clap::{Parser, Subcommand};
use legisbot::prelude::*;
use legisbot::render::{JsonLines, Presenter, TextCards};
use std::io;
use std::path::PathBuf;

/// Filter and explore legislation records from a delimited dataset
#[derive(Parser, Debug)]
#[command(name = "legisbot")]
#[command(about = "Filter legislation records from a delimited dataset")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List each filter with the options derived from the dataset
    Options {
        /// Input CSV file
        #[arg(short, long, default_value = "data.csv")]
        data: PathBuf,
    },

    /// Apply filter selections and print the matching records
    Filter {
        /// Input CSV file
        #[arg(short, long, default_value = "data.csv")]
        data: PathBuf,

        /// Filter selections as NAME=VALUE (e.g. elemento=Esgoto, ano=2001)
        #[arg(short, long = "select", value_name = "NAME=VALUE")]
        select: Vec<String>,

        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Limit number of records loaded
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Validate the dataset structure
    Validate {
        /// Input CSV file
        #[arg(short, long, default_value = "data.csv")]
        data: PathBuf,
    },
}

fn print_available_commands() {
    println!("Available commands:");
    println!("  options   List each filter with the options derived from the dataset");
    println!("  filter    Apply filter selections and print the matching records");
    println!("  validate  Validate the dataset structure");
}

async fn run_options_command(data: PathBuf) -> anyhow::Result<()> {
    let config = ConfigBuilder::new(data).build()?;
    let session = Session::open(&config).await?;

    for def in session.catalog() {
        println!("{} ({})", def.label, def.name);
        println!("  {}", ALL);
        for option in session.options_for(&def.name)? {
            println!("  {}", option);
        }
    }

    Ok(())
}

async fn run_filter_command(
    data: PathBuf,
    select: Vec<String>,
    format: String,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let mut builder = ConfigBuilder::new(data);
    if let Some(limit) = limit {
        builder = builder.limit(limit);
    }
    let config = builder.build()?;

    let mut session = Session::open(&config).await?;

    for selection in &select {
        let (name, value) = parse_selection(selection)?;
        session.set_filter(name, value)?;
    }

    let matching = session.matching();
    eprintln!(
        "{} of {} records match",
        matching.len(),
        session.records().len()
    );

    let stdout = io::stdout();
    match format.as_str() {
        "json" => JsonLines::new(stdout.lock()).render(&matching)?,
        _ => TextCards::new(stdout.lock()).render(&matching)?,
    }

    Ok(())
}

async fn run_validate_command(data: PathBuf) -> anyhow::Result<()> {
    println!("Validating: {}\n", data.display());

    let config = ConfigBuilder::new(data).build()?;
    let session = Session::open(&config).await?;

    println!("Valid legislation dataset");
    println!("  Records: {}", session.records().len());

    for def in session.catalog() {
        let options = session.options_for(&def.name)?;
        println!("  {}: {} options", def.label, options.len());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Options { data }) => run_options_command(data).await,
        Some(Command::Filter {
            data,
            select,
            format,
            limit,
        }) => run_filter_command(data, select, format, limit).await,
        Some(Command::Validate { data }) => run_validate_command(data).await,
        None => {
            print_available_commands();
            Ok(())
        }
    }
}
