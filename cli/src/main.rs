//! docforge CLI - DOCX document assembly tool

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use docforge::{Docforge, DocumentSpec};

#[derive(Parser)]
#[command(name = "docforge")]
#[command(version)]
#[command(about = "Assemble DOCX documents from JSON content specifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a DOCX document from a JSON content specification
    #[command(alias = "gen")]
    Generate {
        /// Input JSON specification file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output DOCX file (defaults to the input name with .docx)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Cover-page logo image
        #[arg(long, value_name = "FILE")]
        logo: Option<PathBuf>,

        /// Base font family
        #[arg(long, default_value = "Calibri")]
        font: String,
    },

    /// Show content counts for a JSON specification
    Info {
        /// Input JSON specification file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            logo,
            font,
        } => generate(&input, output, logo, font),
        Commands::Info { input } => info(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn generate(
    input: &PathBuf,
    output: Option<PathBuf>,
    logo: Option<PathBuf>,
    font: String,
) -> docforge::Result<()> {
    let json = fs::read_to_string(input)?;
    let output = output.unwrap_or_else(|| input.with_extension("docx"));
    log::debug!("Assembling {} -> {}", input.display(), output.display());

    let mut forge = Docforge::new().with_base_font(font);
    if let Some(logo) = logo {
        forge = forge.with_logo(logo);
    }

    let result = forge.assemble_json(&json)?;
    result.save(&output)?;

    println!(
        "{} {} ({} blocks)",
        "Generated".green().bold(),
        output.display(),
        result.document().block_count()
    );
    Ok(())
}

fn info(input: &PathBuf) -> docforge::Result<()> {
    let json = fs::read_to_string(input)?;
    let spec = DocumentSpec::from_json(&json)?;

    println!("{}", "Specification".bold());
    println!("  title:    {}", spec.title);
    println!("  author:   {}", spec.author);
    println!("  sections: {}", spec.section_count());
    println!("  bullets:  {}", spec.bullets.len());
    println!("  numbered: {}", spec.numbered.len());
    println!("  tables:   {}", spec.tables.len());
    println!("  diagrams: {}", spec.diagrams.len());

    for sec in &spec.outline.sections {
        let mut parts = Vec::new();
        if spec.content.contains_key(sec) {
            parts.push("content");
        }
        if spec.bullets.contains_key(sec) {
            parts.push("bullets");
        }
        if spec.numbered.contains_key(sec) {
            parts.push("numbered");
        }
        if spec.tables.contains_key(sec) {
            parts.push("table");
        }
        if spec.diagrams.contains_key(sec) {
            parts.push("diagram");
        }
        println!("  - {} [{}]", sec.cyan(), parts.join(", "));
    }
    Ok(())
}
