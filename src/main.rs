//! Command-line interface for gedwick.
//!
//! Usage:
//!   gedwick `<file>` individuals                 - List individuals with their events
//!   gedwick `<file>` families                    - List families with their children
//!   gedwick `<file>` notes                       - List resolved notes and sources
//!   gedwick `<file>` ancestors `<id>`            - Print the pedigree of an individual
//!   gedwick `<file>` export [-o `<out>`] [--pretty] [--with-citations]
//!                                              - Export records as JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gedwick::export::{ExportOptions, write_json, write_json_file};
use gedwick::gedcom::GedcomParserBuilder;
use gedwick::records::{Citation, ContinuationStyle, RecordSet};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gedwick", version, about = "A tool for inspecting and exporting GEDCOM files")]
struct Cli {
    /// Path to the GEDCOM file
    file: PathBuf,

    /// Log level (error, warn, info, debug, trace); falls back to RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// How CONT/CONC lines extend note text
    #[arg(long, value_enum, default_value_t = Continuation::Newline, global = true)]
    continuation: Continuation,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List individuals with their events
    Individuals,
    /// List families with their children
    Families,
    /// List resolved notes and sources
    Notes,
    /// Print the pedigree of an individual
    Ancestors {
        /// Id of the individual, with or without '@' delimiters
        id: String,
    },
    /// Export records as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
        /// Include resolved notes and sources
        #[arg(long)]
        with_citations: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Continuation {
    /// CONT and CONC both start a new line
    Newline,
    /// CONT starts a new line, CONC appends directly
    Gedcom,
}

impl From<Continuation> for ContinuationStyle {
    fn from(continuation: Continuation) -> Self {
        match continuation {
            Continuation::Newline => ContinuationStyle::Newline,
            Continuation::Gedcom => ContinuationStyle::Gedcom,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// Installs a stderr subscriber, preferring `--log-level` over `RUST_LOG`.
fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let parser = GedcomParserBuilder::for_file(&cli.file)
        .with_continuation_style(cli.continuation.into())
        .build()
        .with_context(|| format!("failed to parse {}", cli.file.display()))?;

    if parser.num_skipped_lines() > 0 {
        tracing::warn!(skipped = parser.num_skipped_lines(), "skipped malformed lines");
    }
    let records = parser.records();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Individuals => print_individuals(&mut out, &records)?,
        Command::Families => print_families(&mut out, &records)?,
        Command::Notes => print_notes(&mut out, &records)?,
        Command::Ancestors { id } => print_ancestors(&mut out, &records, &id)?,
        Command::Export {
            output,
            pretty,
            with_citations,
        } => {
            let options = ExportOptions {
                pretty,
                include_citations: with_citations,
            };
            match output {
                Some(path) => {
                    write_json_file(&path, &records, &options)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Exported to {}", path.display());
                }
                None => {
                    write_json(&mut out, &records, &options)?;
                    writeln!(out)?;
                }
            }
        }
    }

    Ok(())
}

fn print_individuals(out: &mut impl Write, records: &RecordSet) -> io::Result<()> {
    for individual in records.individuals.values() {
        writeln!(
            out,
            "ID: {} | Name: {} | Sex: {}",
            individual.id, individual.name, individual.sex
        )?;
        for event in &individual.events {
            writeln!(
                out,
                "  Event: {} | Date: {} | Place: {}",
                event.kind, event.date, event.place
            )?;
        }
        print_citations(out, records, &individual.notes, &individual.sources)?;
        writeln!(out)?;
    }
    Ok(())
}

fn print_families(out: &mut impl Write, records: &RecordSet) -> io::Result<()> {
    for family in records.families.values() {
        writeln!(
            out,
            "ID: {} | Husband: {} | Wife: {}",
            family.id, family.husband_id, family.wife_id
        )?;
        for child in &family.children_ids {
            writeln!(out, "  Child: {child}")?;
        }
        for event in &family.events {
            writeln!(
                out,
                "  Event: {} | Date: {} | Place: {}",
                event.kind, event.date, event.place
            )?;
        }
        print_citations(out, records, &family.notes, &family.sources)?;
        writeln!(out)?;
    }
    Ok(())
}

fn print_citations(out: &mut impl Write, records: &RecordSet, notes: &[Citation], sources: &[Citation]) -> io::Result<()> {
    for note in notes {
        writeln!(out, "  Note: {}", records.resolve_note(note))?;
    }
    for source in sources {
        writeln!(out, "  Source: {}", records.resolve_source(source))?;
    }
    Ok(())
}

fn print_notes(out: &mut impl Write, records: &RecordSet) -> io::Result<()> {
    for (id, text) in &records.notes {
        writeln!(out, "NOTE {id}:")?;
        for line in text.lines() {
            writeln!(out, "  {line}")?;
        }
    }
    for (id, text) in &records.sources {
        writeln!(out, "SOUR {id}: {text}")?;
    }
    Ok(())
}

fn print_ancestors(out: &mut impl Write, records: &RecordSet, id: &str) -> Result<()> {
    let id = gedwick::parser::line_tokenizer::strip_pointer(id);
    let pedigree = records.pedigree(id)?;

    for (depth, node) in pedigree.iter() {
        let name = records.individual(&node.id).map_or("", |i| i.name.as_str());
        writeln!(out, "{}{} {}", "  ".repeat(depth), node.id, name)?;
    }
    Ok(())
}
