//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Args, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::context::format::ContextFormat;

/// stache - render mustache templates from the command line
#[derive(Parser, Debug)]
#[command(
    name = "stache",
    author,
    version,
    disable_version_flag = true,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Render a mustache template with the given context",
    long_about = "Render a mustache template with the given context.\n\n\
                  If context is omitted, stache reads YAML front matter from standard \
                  input as render context, unless standard input is a terminal.\n\n\
                  YAML front matter begins with --- on a single line, followed by YAML, \
                  ending with another --- on a single line, e.g.\n\n\
                  ---\n\
                  names: [ {name: chris}, {name: mark}, {name: scott} ]\n\
                  ---",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  stache 'Hi {{name}}!' '{\"name\": \"chris\"}'\n    \
                  stache page.mustache context.yaml\n    \
                  stache letter.mustache people.csv --multiple name -o letters/\n    \
                  cat context.yaml | stache page.mustache"
)]
pub struct Cli {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Enable debug logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,

    /// Show version and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

/// Arguments for rendering a template
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Template file, template string, or '-' to read standard input
    #[arg(required_unless_present = "completions", allow_hyphen_values = true)]
    pub template: Option<String>,

    /// Context file (.yaml, .json, .csv), JSON or YAML string, or '-' to read standard input
    #[arg(allow_hyphen_values = true)]
    pub context: Option<String>,

    /// Context format, overriding detection by file extension
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<ContextFormat>,

    /// Write one file per context row, named by this field of the row
    #[arg(long, short = 'm', value_name = "KEY")]
    pub multiple: Option<String>,

    /// Directory for files written with --multiple
    #[arg(
        long,
        short = 'o',
        value_name = "DIR",
        env = "STACHE_OUTPUT_DIR",
        default_value = "."
    )]
    pub output_dir: PathBuf,
}
