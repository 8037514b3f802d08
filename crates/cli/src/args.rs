//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the data format from the `--format` flag or, failing that,
//!   from the data file extension.
//!
//! Non-responsibilities:
//! - Does not read data or render templates (see `main` / `render`).

use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Render a template against INI, JSON, YAML or environment data", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  stencil nginx.conf.j2 config.json\n  stencil nginx.conf.j2 config.ini -o /etc/nginx/nginx.conf\n  cat data.yaml | stencil --format=yaml nginx.conf.j2 -\n  stencil nginx.conf.j2            # render from the current environment\n"
)]
pub struct Cli {
    /// Template file to render
    pub template: PathBuf,

    /// Data file providing the context ('-' reads from stdin; omit to
    /// render from the current environment variables)
    pub data: Option<PathBuf>,

    /// Input data format (ini, json, yaml, env); inferred from the data
    /// file extension when omitted
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write rendered output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Resolve the format tag: an explicit `--format` wins, otherwise the
    /// data file extension decides, and no data file at all means the live
    /// environment.
    pub fn resolve_format(&self) -> anyhow::Result<String> {
        if let Some(ref format) = self.format {
            return Ok(format.clone());
        }
        match self.data {
            None => Ok("env".to_string()),
            Some(ref path) => format_from_extension(path).map(str::to_string).ok_or_else(|| {
                anyhow::anyhow!(
                    "cannot infer data format from '{}'; pass --format",
                    path.display()
                )
            }),
        }
    }
}

fn format_from_extension(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "ini" => Some("ini"),
        "json" => Some("json"),
        "yaml" | "yml" => Some("yaml"),
        "env" => Some("env"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("args should parse")
    }

    #[test]
    fn test_explicit_format_wins_over_extension() {
        let cli = cli(&["stencil", "--format=yaml", "tpl.j2", "data.json"]);
        assert_eq!(cli.resolve_format().unwrap(), "yaml");
    }

    #[test]
    fn test_format_inferred_from_extension() {
        for (file, expected) in [
            ("data.ini", "ini"),
            ("data.json", "json"),
            ("data.yaml", "yaml"),
            ("data.yml", "yaml"),
            ("data.env", "env"),
        ] {
            let cli = cli(&["stencil", "tpl.j2", file]);
            assert_eq!(cli.resolve_format().unwrap(), expected, "for {file}");
        }
    }

    #[test]
    fn test_no_data_file_means_live_environment() {
        let cli = cli(&["stencil", "tpl.j2"]);
        assert_eq!(cli.resolve_format().unwrap(), "env");
    }

    #[test]
    fn test_unknown_extension_requires_explicit_format() {
        let cli = cli(&["stencil", "tpl.j2", "data.txt"]);
        let err = cli.resolve_format().unwrap_err();
        assert!(err.to_string().contains("--format"));
    }

    #[test]
    fn test_stdin_marker_requires_explicit_format() {
        // "-" has no extension, so --format is mandatory for piped data.
        let cli = cli(&["stencil", "tpl.j2", "-"]);
        assert!(cli.resolve_format().is_err());
    }
}
