//! stache - mustache templates from the command line
//!
//! Renders a template (file, literal, or stdin) with a context taken from
//! YAML front matter, JSON, YAML or CSV, either to stdout or fanned out to
//! one file per context row.

use clap::Parser;
use console::Style;
use miette::Diagnostic;
use std::io::{self, IsTerminal, Write};

mod cli;
mod commands;
mod context;
mod error;
mod frontmatter;
mod logging;
mod output;
mod render;
mod source;

use cli::{Cli, RenderArgs};
use error::{Result, StacheError};
use render::MustacheRenderer;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.completions {
        Some(shell) => commands::completions::run(shell, &mut io::stdout().lock()),
        None => render_to_stdout(&cli.render),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}

/// Render with the process's stdin (unless it is a terminal) and stdout.
fn render_to_stdout(args: &RenderArgs) -> Result<()> {
    let stdin = io::stdin();
    let input = if stdin.is_terminal() {
        None
    } else {
        Some(stdin.lock())
    };

    let mut stdout = io::stdout().lock();
    commands::render::run(args, input, &mut stdout, &MustacheRenderer)?;
    stdout.flush()?;
    Ok(())
}

fn report(err: &StacheError) {
    let label = Style::new().for_stderr().red().bold().apply_to("Error:");
    eprintln!("{label} {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}
