//! CLI commands and argument parsing

use crate::decode::DocumentFormat;
use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Generate Go type definitions from a sample JSON or YAML document.
///
/// If the document is a list, its first element is used. Nested objects
/// become their own struct types, embedded in their parent.
#[derive(Parser, Debug)]
#[command(name = "json2go")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the generated type (required unless set in the config file)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Input document; stdin if omitted or "-"
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output Go file; stdout if omitted or "-"
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Package name; defaults to the output directory's name
    #[arg(short, long)]
    pub pkg: Option<String>,

    /// Name of the record type, only used with --map-type
    #[arg(short, long)]
    pub struct_name: Option<String>,

    /// Add an import statement for encoding/json
    #[arg(short = 'a', long)]
    pub add_import: bool,

    /// Interpret the document as map[string]T or map[string][]T
    #[arg(short, long)]
    pub map_type: bool,

    /// Extra struct tag keys repeating the json key (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tag_keys: Vec<String>,

    /// Write the source document next to the output file
    /// (ignored when writing to stdout)
    #[arg(short, long)]
    pub write_json: bool,

    /// Input format; inferred from the input file extension if omitted
    #[arg(short, long, value_enum)]
    pub format: Option<DocumentFormat>,

    /// Skip gofmt-style column alignment
    #[arg(long)]
    pub no_align: bool,

    /// Configuration file (YAML or JSON); flags override its values
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Log level (logs go to stderr)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}
