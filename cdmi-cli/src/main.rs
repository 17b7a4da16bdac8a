//! CDMI CLI - Command-line tool for inspecting CDMI replies
//!
//! This binary provides command-line interfaces for:
//! - ls: classify a listing reply into objects and common prefixes
//! - metadata: print the user metadata of a metadata reply
//! - sysmd: print the system metadata of a metadata reply

use cdmi_reply::{
    metadata_from_json_metadata, parse_metadata, sysmd_from_json_metadata, CommonPrefix, Dict,
    FileType, Limits, Listing, Object, ReplyContext, SysMd, Value,
};
use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "cdmi")]
#[command(about = "CDMI reply inspection tool")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Maximum nesting depth accepted in a reply
    #[arg(long, global = true)]
    max_depth: Option<usize>,
    /// Maximum reply size in bytes
    #[arg(long, global = true)]
    max_document_bytes: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a listing reply into objects and common prefixes
    ///
    /// Examples:
    ///   cdmi ls listing.json
    ///   cdmi ls listing.json --prefix photos/ --format json
    Ls {
        /// Reply file ("-" reads standard input)
        input: PathBuf,
        /// Prefix joined to every child name
        #[arg(long)]
        prefix: Option<String>,
        /// Output format (table, json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print the user metadata of a metadata reply
    Metadata {
        /// Reply file ("-" reads standard input)
        input: PathBuf,
    },
    /// Print the system metadata of a metadata reply
    Sysmd {
        /// Reply file ("-" reads standard input)
        input: PathBuf,
        /// Output format (table, json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut limits = Limits::default();
    if let Some(max_depth) = cli.max_depth {
        limits.max_depth = max_depth;
    }
    if let Some(max_document_bytes) = cli.max_document_bytes {
        limits.max_document_bytes = max_document_bytes;
    }
    let ctx = ReplyContext::new(limits)?;

    match cli.command {
        Commands::Ls {
            input,
            prefix,
            format,
        } => handle_ls(&ctx, &input, prefix.as_deref(), format)?,
        Commands::Metadata { input } => handle_metadata(&ctx, &input)?,
        Commands::Sysmd { input, format } => handle_sysmd(&ctx, &input, format)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_reply(input: &Path) -> Result<Vec<u8>, Box<dyn Error>> {
    let buf = if input == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(input).map_err(|e| format!("cannot read {}: {}", input.display(), e))?
    };
    debug!(input = %input.display(), len = buf.len(), "read reply");
    Ok(buf)
}

#[derive(Serialize)]
struct ListingReport<'a> {
    objects: &'a [Object],
    common_prefixes: &'a [CommonPrefix],
}

fn handle_ls(
    ctx: &ReplyContext,
    input: &Path,
    prefix: Option<&str>,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let buf = read_reply(input)?;
    let listing = Listing::parse(ctx, &buf, prefix)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => {
            for common_prefix in &listing.common_prefixes {
                writeln!(out, "PREFIX  {}", common_prefix.prefix)?;
            }
            for object in &listing.objects {
                writeln!(out, "OBJECT  {}", object.path)?;
            }
        }
        OutputFormat::Json => {
            let report = ListingReport {
                objects: &listing.objects,
                common_prefixes: &listing.common_prefixes,
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn handle_metadata(ctx: &ReplyContext, input: &Path) -> Result<(), Box<dyn Error>> {
    let buf = read_reply(input)?;
    let json_metadata = parse_metadata(ctx, &buf)?;
    let metadata = metadata_from_json_metadata(&json_metadata)?;

    let mut rendered = String::new();
    render_dict(&mut rendered, &metadata, 0)?;
    io::stdout().lock().write_all(rendered.as_bytes())?;
    Ok(())
}

fn render_dict(out: &mut String, dict: &Dict, indent: usize) -> std::fmt::Result {
    for key in dict.sorted_keys() {
        if let Some(value) = dict.get_value(key) {
            render_entry(out, &format!("{}:", key), value, indent)?;
        }
    }
    Ok(())
}

fn render_entry(out: &mut String, label: &str, value: &Value, indent: usize) -> std::fmt::Result {
    let pad = "  ".repeat(indent);
    match value {
        Value::String(s) => writeln!(out, "{}{} {}", pad, label, s),
        Value::SubDict(dict) => {
            writeln!(out, "{}{}", pad, label)?;
            render_dict(out, dict, indent + 1)
        }
        Value::Vector(items) => {
            writeln!(out, "{}{}", pad, label)?;
            for item in items {
                render_entry(out, "-", item, indent + 1)?;
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct SysMdReport<'a> {
    mask: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ftype: Option<FileType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    atime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
}

impl<'a> SysMdReport<'a> {
    fn new(sysmd: &'a SysMd) -> Self {
        Self {
            mask: sysmd.mask.0,
            id: sysmd.id(),
            parent_id: sysmd.parent_id(),
            ftype: sysmd.ftype(),
            mtime: sysmd.mtime().map(format_timestamp),
            atime: sysmd.atime().map(format_timestamp),
            size: sysmd.size(),
        }
    }
}

fn format_timestamp(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| secs.to_string())
}

fn handle_sysmd(
    ctx: &ReplyContext,
    input: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let buf = read_reply(input)?;
    let json_metadata = parse_metadata(ctx, &buf)?;
    let mut sysmd = SysMd::default();
    sysmd_from_json_metadata(&json_metadata, Some(&mut sysmd))?;
    let report = SysMdReport::new(&sysmd);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => {
            writeln!(out, "mask:      {:#06x}", report.mask)?;
            if let Some(id) = report.id {
                writeln!(out, "id:        {}", id)?;
            }
            if let Some(parent_id) = report.parent_id {
                writeln!(out, "parent_id: {}", parent_id)?;
            }
            if let Some(ftype) = report.ftype {
                writeln!(out, "ftype:     {}", ftype.name())?;
            }
            if let Some(mtime) = &report.mtime {
                writeln!(out, "mtime:     {}", mtime)?;
            }
            if let Some(atime) = &report.atime {
                writeln!(out, "atime:     {}", atime)?;
            }
            if let Some(size) = report.size {
                writeln!(out, "size:      {}", size)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
