// src/cli.rs
use std::{fs, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    config::consts::{BASE_URL, BASE_URL_ENV},
    config::options::{ExportFormat, MajorSelector, ScrapeOptions},
    core::HttpSource,
    csv::records_to_string,
    error::{Result, ScrapeError},
    file::{resolve_out_path, write_records_to_path},
    log::{self, LogTarget},
    progress::StderrProgress,
    scrape,
    sic::{self, Record},
    specs,
};

#[derive(Debug, Parser)]
#[command(name = "sic_scrape", version, about = "Scrape the OSHA SIC manual into flat records")]
pub struct Cli {
    /// Manual base URL; page paths are resolved against it
    #[arg(long, env = BASE_URL_ENV, default_value = BASE_URL, global = true)]
    pub base_url: String,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape one Major Group page
    Major {
        /// Manual page id (e.g. 1 for Major Group 01)
        #[arg(conflicts_with_all = ["path", "file"], required_unless_present_any = ["path", "file"])]
        id: Option<u32>,

        /// Page path relative to the base URL
        #[arg(long)]
        path: Option<String>,

        /// Parse a saved HTML page instead of fetching
        #[arg(long, conflicts_with = "path")]
        file: Option<PathBuf>,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Scrape a list of Major Groups ("1,2,7-9") or "all"
    Majors {
        selection: String,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Scrape every Major Group listed in the manual index
    All {
        #[command(flatten)]
        out: OutputArgs,
    },
    /// List Divisions and their Major Group page ids
    List,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Emit a header row (csv/tsv)
    #[arg(long)]
    pub include_headers: bool,

    /// Output file or directory; prints to stdout when omitted
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
            Format::Json => ExportFormat::Json,
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    log::init(LogTarget::Stderr, cli.verbose);
    let src = HttpSource::new(&cli.base_url)?;

    match cli.command {
        Command::Major { id, path, file, out } => {
            let tree = match (id, path, file) {
                (_, _, Some(file)) => specs::major::parse(&fs::read_to_string(file)?)?,
                (_, Some(path), _) => scrape::get_major_tree(&src, &path)?,
                (Some(id), _, _) => scrape::get_major_tree(&src, &scrape::major_path(id))?,
                (None, None, None) => {
                    return Err(ScrapeError::Selection(s!("major: give an id, --path or --file")));
                }
            };
            let records = sic::flatten(&tree);
            emit(&records, &out, &tree.label)
        }
        Command::Majors { selection, out } => {
            let majors = MajorSelector::parse(&selection)?;
            collect(&src, &cli.base_url, majors, &out)
        }
        Command::All { out } => collect(&src, &cli.base_url, MajorSelector::All, &out),
        Command::List => {
            for div in scrape::list_majors(&src)? {
                println!("{}", div.label);
                for m in &div.majors {
                    println!("  {:>3}  {}", m.id, m.label);
                }
            }
            Ok(())
        }
    }
}

fn collect(src: &HttpSource, base_url: &str, majors: MajorSelector, out: &OutputArgs) -> Result<()> {
    let opts = ScrapeOptions { base_url: s!(base_url), majors, ..ScrapeOptions::default() };
    let mut prog = StderrProgress::new();
    let records = scrape::collect(src, &opts, Some(&mut prog))?;
    emit(&records, out, "sic")
}

/// Print or write `records`. A directory `--out` gets `<stem>.<ext>` inside it.
fn emit(records: &[Record], out: &OutputArgs, stem: &str) -> Result<()> {
    let format = ExportFormat::from(out.format);
    match &out.out {
        None => {
            print!("{}", records_to_string(records, format, out.include_headers)?);
        }
        Some(p) => {
            let path = resolve_out_path(p, stem, format);
            write_records_to_path(&path, records, format, out.include_headers)?;
            eprintln!("Wrote {} records to {}", records.len(), path.display());
        }
    }
    Ok(())
}
