//! printlayout CLI - report pagination tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use printlayout::{JobSpec, JsonFormat, RegionKind, SpoolServer};

#[derive(Parser)]
#[command(name = "printlayout")]
#[command(version)]
#[command(about = "Lay out paginated reports and spool them for printing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a job and show the layout plan
    Layout {
        /// Job file (JSON)
        #[arg(value_name = "JOB")]
        job: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Lay out a job and submit it to a spool queue
    Print {
        /// Job file (JSON)
        #[arg(value_name = "JOB")]
        job: PathBuf,

        /// Queue name
        #[arg(short, long, env = "PRINTLAYOUT_QUEUE")]
        queue: String,

        /// Spool directory
        #[arg(short, long, value_name = "DIR", env = "PRINTLAYOUT_SPOOL")]
        spool: PathBuf,

        /// Create the queue if it does not exist
        #[arg(long)]
        create: bool,
    },

    /// Show job information
    Info {
        /// Job file (JSON)
        #[arg(value_name = "JOB")]
        job: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Plain-text outline, one line per placement
    Text,
    /// JSON layout plan
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Layout {
            job,
            format,
            compact,
            output,
        }) => cmd_layout(&job, format, compact, output.as_deref()),
        Some(Commands::Print {
            job,
            queue,
            spool,
            create,
        }) => cmd_print(&job, &queue, &spool, create),
        Some(Commands::Info { job }) => cmd_info(&job),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: printlayout <COMMAND> <JOB>".yellow());
            println!("       printlayout --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_layout(
    job: &Path,
    format: Format,
    compact: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = printlayout::layout_file(job)?;

    let content = match format {
        Format::Text => printlayout::render::to_text(&document)?,
        Format::Json => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            printlayout::render::to_json(&document, json_format)?
        }
    };

    if let Some(path) = output {
        fs::write(path, &content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn cmd_print(
    job: &Path,
    queue: &str,
    spool: &Path,
    create: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let collection = JobSpec::from_file(job)?.into_collection()?;
    let server = SpoolServer::new(spool);
    if create {
        server.create_queue(queue)?;
    }

    log::debug!("Spool directory {}", server.root().display());

    if collection.print_to_queue(&server, queue)? {
        println!("{} {}", "Submitted to".green(), queue);
    } else {
        println!("{}", "Nothing to print".yellow());
    }

    Ok(())
}

fn cmd_info(job: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let spec = JobSpec::from_file(job)?;

    println!("{}", "Job Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), job.display());
    if let Some(ref name) = spec.file_name {
        println!("{}: {}", "Job name".bold(), name);
    }
    println!("{}: {}", "Documents".bold(), spec.documents.len());
    println!("{}: {}", "Items".bold(), spec.item_count());
    println!(
        "{}: {}",
        "Page numbers".bold(),
        if spec.individual_page_numbers {
            "per document"
        } else {
            "continuous"
        }
    );

    for (index, document) in spec.documents.iter().enumerate() {
        println!();
        println!("{} #{}", "Document".cyan().bold(), index + 1);
        println!("{}", "─".repeat(40).dimmed());
        for kind in RegionKind::ALL {
            if let Some(region) = document.regions.get(&kind) {
                println!(
                    "  {:<20} {:>7.2}pt  {}",
                    kind.as_str(),
                    region.height,
                    region.rule
                );
            }
        }
    }

    let collection = spec.into_collection()?;
    match collection.assemble() {
        Ok(output) => {
            println!();
            println!("{}: {}", "Pages".bold(), output.page_count());
        }
        Err(e) => {
            println!();
            println!("{}: {}", "Layout".bold(), e.to_string().red());
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "printlayout".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Report pagination tool");
    println!();
    println!("License: MIT");
}
