//! fontmerge - attach the fonts used by ASS subtitles to a Matroska file
//!
//! Reads each subtitle script, works out which fonts its text is rendered
//! with, finds those fonts among the installed ones (and an optional font
//! folder) and remuxes the video with mkvmerge, attaching every font file.

mod mkvmerge;
mod validate;

use anyhow::{Context, Result};
use clap::Parser;
use fontmerge_core::{analysis::FontUsage, fonts::FontCatalog, utils::create_hash_set, Script};
use log::{debug, error, info, warn};
use mkvmerge::{default_output, MergeCommand};
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser, Debug)]
#[command(name = "fontmerge")]
#[command(author, version, about = "Attach the fonts used by ASS subtitles to a Matroska file", long_about = None)]
#[command(after_help = "EXAMPLES:
    fontmerge episode.mkv episode.en.ass episode.fr.ass
    fontmerge episode.mkv signs.ass --fontfolder ./fonts -o episode.final.mkv
    fontmerge episode.mkv episode.en.ass --list --json

Set RUST_LOG=debug for matching details.")]
struct Cli {
    /// Matroska file to attach the fonts to
    #[arg(value_name = "MKV")]
    mkv: PathBuf,

    /// ASS subtitle files whose fonts are attached
    #[arg(value_name = "SUBTITLES", required = true)]
    subtitles: Vec<PathBuf>,

    /// Path to mkvmerge when it is not on PATH
    #[arg(long, value_name = "PATH")]
    mkvmerge: Option<PathBuf>,

    /// Additional folder searched for fonts
    #[arg(long, value_name = "DIR")]
    fontfolder: Option<PathBuf>,

    /// Print the fonts each subtitle uses and exit
    #[arg(long)]
    list: bool,

    /// Print the font listing as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Print the mkvmerge command instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Output file [default: <MKV stem>.fontmerge.mkv]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("{err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    validate::check_subtitles(&cli.subtitles)?;
    validate::check_matroska(&cli.mkv)?;

    if cli.list {
        return list_fonts(&cli.subtitles, cli.json);
    }

    let program = validate::mkvmerge_program(cli.mkvmerge.as_deref())?;
    let output = cli.output.clone().unwrap_or_else(|| default_output(&cli.mkv));
    validate::check_writable(validate::output_dir(&output))?;
    let font_dir = validate::font_folder(cli.fontfolder.as_deref())?;

    info!("loading installed fonts");
    if let Some(dir) = font_dir {
        info!("including fonts from {}", dir.display());
    }
    let catalog = FontCatalog::load(font_dir)?;
    debug!("{} font faces available", catalog.len());

    let mut command = MergeCommand::new(program, cli.mkv.clone(), output.clone());
    let mut attached = create_hash_set();
    let mut missing = 0;

    info!("collecting fonts used in subtitles");
    for subtitle in &cli.subtitles {
        let source = read_subtitle(subtitle)?;
        let script = parse_subtitle(subtitle, &source)?;
        let usage = fontmerge_core::collect_fonts(&script);
        report_warnings(subtitle, &usage);

        let resolution = catalog.resolve(&usage.fonts);
        for name in &resolution.missing {
            error!("{}: font `{name}` not found", subtitle.display());
        }
        missing += resolution.missing.len();

        for path in resolution.paths {
            if attached.insert(path.clone()) {
                command.attach(path);
            } else {
                debug!("{} already attached", path.display());
            }
        }
    }

    if missing > 0 {
        warn!("{missing} fonts were not found; are they installed?");
    }
    info!("{} font files found", command.attachments().len());

    if cli.dry_run {
        println!("{command}");
        return Ok(());
    }

    info!("merging {} with {} fonts", cli.mkv.display(), command.attachments().len());
    command.run()?;
    info!("wrote {}", output.display());
    Ok(())
}

/// Print the fonts of every subtitle, as text or JSON
fn list_fonts(subtitles: &[PathBuf], json: bool) -> Result<()> {
    let mut listing = Vec::with_capacity(subtitles.len());

    for subtitle in subtitles {
        let source = read_subtitle(subtitle)?;
        let script = parse_subtitle(subtitle, &source)?;
        let usage = fontmerge_core::collect_fonts(&script);
        report_warnings(subtitle, &usage);

        if json {
            listing.push(serde_json::json!({
                "subtitle": subtitle.display().to_string(),
                "usage": serde_json::to_value(&usage)?,
            }));
        } else {
            println!("{}", subtitle.display());
            for font in &usage.fonts {
                println!("  {font}");
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    }
    Ok(())
}

fn read_subtitle(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn parse_subtitle<'a>(path: &Path, source: &'a str) -> Result<Script<'a>> {
    let script = Script::parse(source).with_context(|| format!("cannot parse {}", path.display()))?;
    for issue in script.issues() {
        if issue.is_error() {
            warn!("{}: {issue}", path.display());
        } else {
            debug!("{}: {issue}", path.display());
        }
    }
    Ok(script)
}

fn report_warnings(path: &Path, usage: &FontUsage<'_>) {
    for warning in &usage.warnings {
        warn!("{}: {warning}", path.display());
    }
}
