//! stencil - render a template against structured data.
//!
//! Responsibilities:
//! - Parse command-line arguments and set up logging.
//! - Open the template and data sources, build the context through
//!   `stencil-context`, render, and write the result.
//!
//! Does NOT handle:
//! - Format parsing logic (see `crates/context`).
//!
//! Invariants:
//! - Errors are printed to stderr and exit with a nonzero status; nothing
//!   partial is ever written to the output file on failure.

mod args;
mod render;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use args::Cli;
use clap::Parser;
use stencil_context::ContextReader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let template_name = display_name(&cli.template);
    let template_source = read_source(&cli.template)
        .map_err(|e| anyhow::anyhow!("failed to read template '{template_name}': {e}"))?;

    let format = cli.resolve_format()?;
    let environ: BTreeMap<String, String> = std::env::vars().collect();

    let mut data_stream: Option<Box<dyn Read>> = match cli.data {
        None => None,
        Some(ref path) if path.as_os_str() == "-" => Some(Box::new(io::stdin())),
        Some(ref path) => {
            let file = File::open(path)
                .map_err(|e| anyhow::anyhow!("failed to open '{}': {e}", path.display()))?;
            Some(Box::new(file))
        }
    };

    let reader = ContextReader::new();
    let context = reader.read(&format, data_stream.as_deref_mut(), &environ)?;
    tracing::debug!(%format, keys = context.len(), "context ready");

    let rendered = render::render(&template_name, &template_source, &context)?;

    match cli.output {
        Some(ref path) => std::fs::write(path, rendered)
            .map_err(|e| anyhow::anyhow!("failed to write '{}': {e}", path.display()))?,
        None => io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

/// Read the template from a file, or from stdin when the path is `-`.
fn read_source(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
