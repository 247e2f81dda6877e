//! procmap CLI - maintain the executable → game process mapping
//!
//! # Commands
//!
//! ```bash
//! procmap validate                 # Report and repair echo mismatches (dry run)
//! procmap validate --write         # ... and rewrite the mapping file in place
//! procmap validate --check         # Exit 1 if any record needs repair
//! procmap sort                     # Write a key-sorted copy
//! procmap export --layout fixed    # Export to CSV
//! procmap find "counter strike"    # Look up an executable
//! procmap list --search valorant   # List known games
//! ```
//!
//! The mapping path comes from `--mapping`, then `GAME_DATA_JSON`, then
//! `games/process_mapping.json`.

use clap::{Parser, Subcommand};
use procmap::config::{Config, DEFAULT_CSV_OUTPUT, DEFAULT_SORTED_OUTPUT, LOG_FILTER_ENV};
use procmap::logs::{log_error, log_info, log_success, log_warning_indent, LOG_SINK};
use procmap::{
    display_name, export_csv, find_process, load_mapping, search, sorted_json, to_csv_string,
    to_pretty_json, validate_file, write_sorted, CsvLayout, Diagnostic, ValidateOptions,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Output path meaning "write to stdout".
const STDOUT: &str = "-";

#[derive(Parser)]
#[command(name = "procmap")]
#[command(about = "Validate, repair, sort and export the game process mapping", long_about = None)]
struct Cli {
    /// Mapping file (default: $GAME_DATA_JSON or games/process_mapping.json)
    #[arg(short, long, global = true)]
    mapping: Option<PathBuf>,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every record ends with its own executable name, repairing mismatches
    Validate {
        /// Rewrite the mapping file with the repaired records
        #[arg(short, long, conflicts_with_all = ["output", "check"])]
        write: bool,

        /// Write the repaired mapping here instead ('-' for stdout)
        #[arg(short, long, conflicts_with_all = ["check", "json"])]
        output: Option<PathBuf>,

        /// Do not repair; exit with status 1 if any record needs repair
        #[arg(long)]
        check: bool,

        /// Print the validation report as JSON on stdout instead of warnings
        #[arg(long)]
        json: bool,
    },

    /// Write a copy of the mapping with keys sorted
    Sort {
        /// Output file ('-' for stdout)
        #[arg(short, long, default_value = DEFAULT_SORTED_OUTPUT)]
        output: PathBuf,
    },

    /// Export the mapping to CSV, sorted by executable
    Export {
        /// Column layout
        #[arg(short, long, value_enum, default_value_t = CsvLayout::Joined)]
        layout: CsvLayout,

        /// Output file ('-' for stdout)
        #[arg(short, long, default_value = DEFAULT_CSV_OUTPUT)]
        output: PathBuf,
    },

    /// Find the executable for a game name, keyword or executable
    Find {
        /// Name to look up (case-insensitive)
        name: String,
    },

    /// List games as "Game Name :: executable"
    List {
        /// Only show entries whose executable or game name contains this
        #[arg(short, long)]
        search: Option<String>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::resolve(cli.mapping, cli.quiet);
    LOG_SINK.set_quiet(config.quiet);

    let result = match cli.command {
        Commands::Validate {
            write,
            output,
            check,
            json,
        } => cmd_validate(&config, write, output.as_deref(), check, json),

        Commands::Sort { output } => cmd_sort(&config, &output),

        Commands::Export { layout, output } => cmd_export(&config, layout, &output),

        Commands::Find { name } => cmd_find(&config, &name),

        Commands::List { search } => cmd_list(&config, search.as_deref()),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_validate(
    config: &Config,
    write: bool,
    output: Option<&Path>,
    check: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("✔️  Validating: {}", config.mapping_path.display()));

    let options = ValidateOptions {
        check_only: check,
        write_back: write,
    };
    let outcome = validate_file(&config.mapping_path, options)?;
    let report = &outcome.report;

    if report.is_clean() {
        log_success(format!("All {} records valid", report.checked));
    } else {
        log_info(format!(
            "📊 Results: {} checked, {} {}",
            report.checked,
            report.diagnostics.len(),
            if check { "need repair" } else { "repaired" }
        ));
        if !json {
            report_diagnostics(&report.diagnostics);
        }
    }

    if outcome.written {
        log_success(format!("💾 Mapping rewritten: {}", config.mapping_path.display()));
    } else if let Some(path) = output {
        write_output(&to_pretty_json(&outcome.mapping)?, path)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    }

    if check && !report.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        log_warning_indent(diag.to_string(), 1);
    }
}

fn cmd_sort(config: &Config, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("🔤 Sorting: {}", config.mapping_path.display()));

    let mapping = load_mapping(&config.mapping_path)?;

    if output == Path::new(STDOUT) {
        print!("{}", sorted_json(&mapping)?);
    } else {
        write_sorted(&mapping, output)?;
        log_success(format!("💾 {} entries written to: {}", mapping.len(), output.display()));
    }

    Ok(())
}

fn cmd_export(config: &Config, layout: CsvLayout, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("📄 Exporting: {}", config.mapping_path.display()));

    let mapping = load_mapping(&config.mapping_path)?;

    if output == Path::new(STDOUT) {
        print!("{}", to_csv_string(&mapping, layout)?);
    } else {
        let rows = export_csv(&mapping, layout, output)?;
        log_success(format!("💾 {} rows written to: {}", rows, output.display()));
    }

    Ok(())
}

fn cmd_find(config: &Config, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mapping = load_mapping(&config.mapping_path)?;

    match find_process(&mapping, name) {
        Some(exe) => {
            println!("{}", exe);
            Ok(())
        }
        None => Err(format!("No executable found for '{}'", name).into()),
    }
}

fn cmd_list(config: &Config, term: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mapping = load_mapping(&config.mapping_path)?;
    let hits = search(&mapping, term.unwrap_or(""));

    for &(exe, record) in &hits {
        println!("{} :: {}", display_name(record.game_name().unwrap_or(exe)), exe);
    }

    log_info(format!("🎮 {} of {} games", hits.len(), mapping.len()));
    Ok(())
}

fn write_output(content: &str, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if path == Path::new(STDOUT) {
        print!("{}", content);
    } else {
        fs::write(path, content)?;
        log_success(format!("💾 Output written to: {}", path.display()));
    }
    Ok(())
}
