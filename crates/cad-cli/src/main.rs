//! CAD Tracker column checker CLI
//!
//! Command-line tool for checking a county tax-roll export against the
//! CAD tracker property schema before upload.

use cad_core::{analyze_columns, read_column_labels, AliasTable, Analysis};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Exit status when critical fields are missing
const EXIT_BLOCKED: i32 = 2;

/// Number of aliases shown for a field with no match
const TRIED_PREVIEW: usize = 3;

#[derive(Parser)]
#[command(name = "cad-cli")]
#[command(about = "CAD Tracker spreadsheet column checker", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a spreadsheet's columns and show the schema mapping
    Analyze {
        /// Path to the spreadsheet (.csv, .xlsx, .xlsm, .xls, .ods)
        #[arg(short, long)]
        file: PathBuf,

        /// Alias table to use instead of the built-in one (JSON)
        #[arg(short, long)]
        aliases: Option<PathBuf>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the built-in alias table as a JSON template
    Aliases {
        /// Output path for the alias table
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_BLOCKED),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns false when the analyzed file is missing critical fields
fn run() -> cad_core::Result<bool> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            aliases,
            json,
        } => cmd_analyze(&file, aliases.as_deref(), json),
        Commands::Aliases { output } => cmd_aliases(&output).map(|_| true),
    }
}

fn cmd_analyze(file: &Path, aliases: Option<&Path>, json: bool) -> cad_core::Result<bool> {
    let table = match aliases {
        Some(path) => AliasTable::load(path)?,
        None => AliasTable::default(),
    };

    let columns = read_column_labels(file)?;
    let analysis = analyze_columns(file.display().to_string(), columns, &table);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_report(&analysis, &table);
    }

    Ok(!analysis.is_blocking())
}

fn print_report(analysis: &Analysis, table: &AliasTable) {
    let rule = "=".repeat(80);

    println!("{}", rule);
    println!("ANALYZING: {}", analysis.source);
    println!("{}", rule);
    println!();
    println!("Total Columns: {}", analysis.columns.len());
    println!();
    println!("COLUMNS FOUND:");
    println!("{}", "-".repeat(80));
    for (i, col) in analysis.columns.iter().enumerate() {
        println!("{:2}. {}", i + 1, col);
    }

    println!();
    println!("{}", rule);
    println!("COLUMN MAPPING:");
    println!("{}", rule);
    println!();

    for entry in table.entries() {
        match analysis.result.get(entry.field) {
            Some(col) => println!("✅ {:20} → '{}'", entry.field, col),
            None => {
                let tried: Vec<&str> = entry
                    .aliases
                    .iter()
                    .take(TRIED_PREVIEW)
                    .map(String::as_str)
                    .collect();
                println!("❌ {:20} → NOT FOUND (tried: {})", entry.field, tried.join(", "));
            }
        }
    }

    if !analysis.result.unmatched.is_empty() {
        println!();
        println!("⚠️  UNMAPPED COLUMNS (will be ignored):");
        for col in &analysis.result.unmatched {
            println!("   - {}", col);
        }
    }

    println!();
    println!("{}", rule);
    println!("RECOMMENDED ACTION:");
    println!("{}", rule);
    println!();

    let missing = analysis.readiness.missing();
    if missing.is_empty() {
        println!("✅ All critical fields found! Upload should work.");
        println!();
        println!("Mapped columns:");
        for m in &analysis.result.mapped {
            println!("  {:20} ← '{}'", m.field, m.column);
        }
    } else {
        let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
        println!("❌ CRITICAL FIELDS MISSING: {}", names.join(", "));
        println!();
        println!("You need to either:");
        println!("  1. Rename columns in the spreadsheet to match expected names, OR");
        println!("  2. Add your column names to an alias table and pass it with --aliases");
        println!();
        println!("Your columns: {:?}", analysis.columns);
    }
}

fn cmd_aliases(output: &Path) -> cad_core::Result<()> {
    let table = AliasTable::default();
    table.save(output)?;

    println!("Created alias table: {}", output.display());
    println!("Fields: {}", table.entries().len());
    println!();
    println!("Edit the file to add your column names, then run:");
    println!("  cad-cli analyze --file <spreadsheet> --aliases {}", output.display());

    Ok(())
}
