//! Course Catalog - Binary Entry Point
//!
//! Loads a course CSV and answers sort/find/benchmark requests against any
//! of the three structures, either as one-shot subcommands or from the
//! interactive menu.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};

use course_catalog::config::Settings;
use course_catalog::loader;
use course_catalog::{BenchmarkHarness, CatalogFacade, SharedRecord, StructureKind};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print all courses in identifier order
    List {
        /// Course CSV file
        path: PathBuf,

        /// Structure producing the sorted view
        #[arg(short, long, default_value_t = StructureKind::Tree)]
        structure: StructureKind,
    },

    /// Look up one course
    Find {
        /// Course CSV file
        path: PathBuf,

        /// Course identifier
        id: String,

        /// Structure to search
        #[arg(short, long, default_value_t = StructureKind::Tree)]
        structure: StructureKind,
    },

    /// Benchmark the three structures on a loaded CSV
    Bench {
        /// Course CSV file
        path: PathBuf,

        /// Trials per structure
        #[arg(short, long)]
        trials: Option<usize>,
    },

    /// Benchmark the three structures across generated dataset sizes
    Scale {
        /// Dataset sizes (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        sizes: Vec<usize>,

        /// Trials per structure per size
        #[arg(short, long)]
        trials: Option<usize>,
    },

    /// Interactive menu
    Menu {
        /// Course CSV file
        path: PathBuf,
    },
}

impl Cli {
    fn run(self) -> anyhow::Result<()> {
        setup_logging(self.verbose);

        let settings = match &self.config {
            Some(path) => Settings::load(path).map_err(anyhow::Error::msg)?,
            None => Settings::default(),
        };

        match self.command {
            Command::List { path, structure } => {
                let facade = load(&path)?;
                print_records(&facade.sorted(structure));
            }
            Command::Find {
                path,
                id,
                structure,
            } => {
                let facade = load(&path)?;
                print_found(&facade, structure, &id);
            }
            Command::Bench { path, trials } => {
                let facade = load(&path)?;
                let trials = trials.unwrap_or(settings.trials);
                print_benchmark(&facade, trials)?;
            }
            Command::Scale { sizes, trials } => {
                let sizes = if sizes.is_empty() {
                    settings.sizes.clone()
                } else {
                    sizes
                };
                let trials = trials.unwrap_or(settings.scaling_trials);
                let harness = BenchmarkHarness::new().with_generator(settings.generator());
                let table = harness
                    .measure_across_sizes(&sizes, trials)
                    .context("scaling benchmark failed")?;

                println!("\n=== Sort Complexity Benchmark (empirical) ===");
                println!("Average seconds over {trials} repeats\n");
                print!("{table}");
            }
            Command::Menu { path } => {
                let facade = load(&path)?;
                menu(&facade, &settings)?;
            }
        }

        Ok(())
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn load(path: &Path) -> anyhow::Result<CatalogFacade> {
    let records = loader::load_file(path)
        .with_context(|| format!("error loading courses from {}", path.display()))?;

    let mut facade = CatalogFacade::new();
    let count = facade.load(records);
    println!("Loaded {count} courses from {}", path.display());
    Ok(facade)
}

fn print_records(records: &[SharedRecord]) {
    if records.is_empty() {
        println!("No courses found.");
    }
    for record in records {
        println!("{}: {}", record.identifier(), record.title());
    }
}

fn print_found(facade: &CatalogFacade, kind: StructureKind, id: &str) {
    match facade.find(kind, id) {
        Some(record) => println!("Found ({}): {record}", kind.display_name()),
        None => println!("Found ({}): Not found", kind.display_name()),
    }
}

fn print_benchmark(facade: &CatalogFacade, trials: usize) -> anyhow::Result<()> {
    let report = facade
        .benchmark_current(&BenchmarkHarness::new(), trials)
        .context("benchmark failed")?;

    println!("\nAverage Seconds over {trials} runs:");
    for (label, secs) in report.as_map() {
        println!("{label}: {secs:.6} seconds");
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> anyhow::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn menu(facade: &CatalogFacade, settings: &Settings) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\nCourses (BST | Sorted)");
    print_records(&facade.sorted_by_tree());

    loop {
        println!("\nMenu:");
        for (number, kind) in (1..).zip(StructureKind::ALL) {
            println!("{number}. Sorted ({})", kind.display_name());
        }
        for (number, kind) in (4..).zip(StructureKind::ALL) {
            println!("{number}. Find ({})", kind.display_name());
        }
        println!("7. Benchmark Current Dataset");
        println!("0. Exit");

        let Some(choice) = prompt(&mut input, "Enter your choice (0-7): ")? else {
            break;
        };

        match choice.as_str() {
            "0" => {
                println!("Exiting...");
                break;
            }
            "1" | "2" | "3" => {
                let kind = StructureKind::ALL[choice.parse::<usize>()? - 1];
                print_records(&facade.sorted(kind));
            }
            "4" | "5" | "6" => {
                let kind = StructureKind::ALL[choice.parse::<usize>()? - 4];
                let message = format!("Enter course ID to find ({}): ", kind.display_name());
                let Some(id) = prompt(&mut input, &message)? else {
                    break;
                };
                print_found(facade, kind, &id);
            }
            "7" => {
                if let Err(e) = print_benchmark(facade, settings.trials) {
                    println!("{e:#}");
                }
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
