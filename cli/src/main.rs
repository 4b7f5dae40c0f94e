//! cvforge CLI - résumé export tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cvforge::detect::pdf_version;
use cvforge::render::ResumeOutline;
use cvforge::{
    detect_format_from_bytes, load_file, Cv, CvForge, ExportFormat, JsonFormat, PageSetup,
};

#[derive(Parser)]
#[command(name = "cvforge")]
#[command(author = "cv-forge")]
#[command(version)]
#[command(about = "Export structured CV data to PDF, DOCX, and JSON", long_about = None)]
struct Cli {
    /// Input CV (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a CV to all formats (PDF, DOCX, JSON)
    Convert {
        /// Input CV (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// PDF paper size
        #[arg(long, value_enum, default_value = "a4")]
        paper: Paper,
    },

    /// Export a CV to PDF
    Pdf {
        /// Input CV (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (derived from the CV title if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// PDF paper size
        #[arg(long, value_enum, default_value = "a4")]
        paper: Paper,
    },

    /// Export a CV to DOCX
    Docx {
        /// Input CV (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (derived from the CV title if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Re-export a CV as a JSON export document
    Json {
        /// Input CV (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show information about a CV or an exported document
    Info {
        /// CV (JSON), PDF, or DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Paper {
    /// ISO A4 (210 x 297 mm)
    A4,
    /// US Letter (8.5 x 11 in)
    Letter,
}

impl From<Paper> for PageSetup {
    fn from(paper: Paper) -> Self {
        match paper {
            Paper::A4 => PageSetup::a4(),
            Paper::Letter => PageSetup::letter(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            paper,
        }) => cmd_convert(&input, output.as_deref(), paper),
        Some(Commands::Pdf {
            input,
            output,
            paper,
        }) => cmd_single(&input, output.as_deref(), ExportFormat::Pdf, paper),
        Some(Commands::Docx { input, output }) => {
            cmd_single(&input, output.as_deref(), ExportFormat::Docx, Paper::A4)
        }
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), Paper::A4)
            } else {
                println!("{}", "Usage: cvforge <FILE> [OUTPUT]".yellow());
                println!("       cvforge --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(input: &Path, output: Option<&Path>, paper: Paper) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_export", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Loading CV...");
    let cv = load_file(input)?;
    pb.inc(1);

    pb.set_message("Rendering documents...");
    let results = CvForge::new()
        .with_page(paper.into())
        .export_all(&cv, &ExportFormat::ALL)?;
    pb.inc(1);

    pb.set_message("Writing files...");
    for result in &results {
        fs::write(output_dir.join(&result.filename), &result.bytes)?;
    }
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, result) in results.iter().enumerate() {
        let branch = if i + 1 == results.len() { "└─" } else { "├─" };
        println!(
            "  {} {} {}",
            branch.dimmed(),
            result.filename,
            format!("({} bytes)", result.len()).dimmed()
        );
    }

    Ok(())
}

fn cmd_single(
    input: &Path,
    output: Option<&Path>,
    format: ExportFormat,
    paper: Paper,
) -> Result<(), Box<dyn std::error::Error>> {
    let cv = load_file(input)?;
    let result = CvForge::new().with_page(paper.into()).export(&cv, format)?;

    let path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(&result.filename));
    fs::write(&path, &result.bytes)?;
    println!("{} {}", "Saved to".green(), path.display());

    Ok(())
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let cv = load_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = CvForge::new().with_json_format(format).json(&cv)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let format = detect_format_from_bytes(&data)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Size".bold(), format!("{} bytes", data.len()));

    match format {
        ExportFormat::Pdf => {
            let version = pdf_version(&data).unwrap_or_else(|| "unknown".to_string());
            println!("{}: PDF {}", "Format".bold(), version);
        }
        ExportFormat::Docx => println!("{}: DOCX package", "Format".bold()),
        ExportFormat::Json => {
            println!("{}: CV (JSON)", "Format".bold());
            let imported = cvforge::import_json(&data)?;
            print_cv_summary(&imported.cv)?;
            if !imported.versions.is_empty() {
                println!("{}: {}", "Versions".bold(), imported.versions.len());
            }
        }
    }

    Ok(())
}

fn print_cv_summary(cv: &Cv) -> Result<(), Box<dyn std::error::Error>> {
    let personal = &cv.data.personal;
    println!("{}: {}", "Title".bold(), cv.title);
    let name = personal.full_name();
    if !name.is_empty() {
        println!("{}: {}", "Name".bold(), name);
    }
    if !personal.title.is_empty() {
        println!("{}: {}", "Professional title".bold(), personal.title);
    }

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    let outline = ResumeOutline::build(cv);
    for heading in outline.headings() {
        println!("  {} {}", "•".dimmed(), heading);
    }

    let stats = CvForge::new()
        .with_stats()
        .export(cv, ExportFormat::Pdf)?
        .stats
        .unwrap_or_default();

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "cvforge".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Résumé export tool");
    println!();
    println!("License: MIT");
}
