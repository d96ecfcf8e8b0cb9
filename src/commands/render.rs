//! Render command implementation
//!
//! Resolves the template and context arguments, merges template front matter
//! with the context (context wins), and writes the rendered result to stdout
//! or, with `--multiple`, to one file per context row.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::cli::RenderArgs;
use crate::context::format::ContextFormat;
use crate::context::{Context, ContextData, loader};
use crate::error::{Result, StacheError, context};
use crate::frontmatter;
use crate::output;
use crate::render::Renderer;
use crate::source::{STDIN_ARG, Source};

/// Run the render command.
///
/// `stdin` is `None` when standard input must not be read (e.g. it is a
/// terminal). It is consumed at most once.
pub fn run<R: BufRead, W: Write>(
    args: &RenderArgs,
    mut stdin: Option<R>,
    stdout: &mut W,
    renderer: &dyn Renderer,
) -> Result<()> {
    let template_arg = args
        .template
        .as_deref()
        .ok_or_else(|| StacheError::MissingArgument {
            name: "template".to_string(),
        })?;

    let template_source = if template_arg == STDIN_ARG {
        Source::from_reader(take_stdin(&mut stdin)?)?
    } else {
        Source::from_arg(template_arg)?
    };

    let user_data = load_user_context(args, &mut stdin)?;
    let (template_context, body) = frontmatter::extract(template_source.text(), false)?;
    let body = body.unwrap_or_default();
    debug!(
        template = %template_source,
        front_matter_keys = template_context.len(),
        "template resolved"
    );

    match (args.multiple.as_deref(), user_data) {
        (Some(key), ContextData::Rows(rows)) => write_multiple(
            key,
            rows,
            &template_context,
            body,
            &args.output_dir,
            renderer,
        ),
        (Some(key), ContextData::Single(_)) => Err(context::rows_required(key)),
        (None, ContextData::Single(user_context)) => {
            let rendered = renderer.render(body, &template_context.merged_with(user_context))?;
            stdout.write_all(rendered.as_bytes())?;
            Ok(())
        }
        (None, ContextData::Rows(rows)) => {
            // Render every row before writing anything
            let rendered = rows
                .into_iter()
                .map(|row| renderer.render(body, &template_context.merged_with(row)))
                .collect::<Result<Vec<_>>>()?;
            for text in rendered {
                stdout.write_all(text.as_bytes())?;
            }
            Ok(())
        }
    }
}

fn take_stdin<R>(stdin: &mut Option<R>) -> Result<R> {
    stdin.take().ok_or(StacheError::StdinUnavailable)
}

/// Load the context argument, or front matter from stdin when it is omitted.
fn load_user_context<R: BufRead>(args: &RenderArgs, stdin: &mut Option<R>) -> Result<ContextData> {
    let source = match args.context.as_deref() {
        Some(STDIN_ARG) => Source::from_reader(take_stdin(stdin)?)?,
        Some(arg) => Source::from_arg(arg)?,
        None => {
            return match stdin.take() {
                Some(reader) => {
                    let (user_context, _) = frontmatter::read_frontmatter_from_stream(reader)?;
                    Ok(ContextData::Single(user_context))
                }
                None => Ok(ContextData::Single(Context::new())),
            };
        }
    };

    let format = ContextFormat::resolve(&source, args.format);
    loader::load(&source, format)
}

fn write_multiple(
    key: &str,
    rows: Vec<Context>,
    template_context: &Context,
    body: &str,
    output_dir: &Path,
    renderer: &dyn Renderer,
) -> Result<()> {
    if rows.is_empty() {
        warn!("context has no rows, no files written");
        return Ok(());
    }

    let mut written = HashSet::new();
    for (i, row) in rows.into_iter().enumerate() {
        let path = output_dir.join(output::output_name(key, &row, i + 1));
        let rendered = renderer.render(body, &template_context.merged_with(row))?;
        if !written.insert(path.clone()) {
            warn!(path = %path.display(), "overwriting file written by an earlier row");
        }
        output::write_atomic(&path, &rendered)?;
        info!(path = %path.display(), "rendered");
    }
    Ok(())
}
