//! Wires the command-line options to the parse → render → launch pipeline.

use anyhow::Context;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::MapError;
use crate::launcher::{write_page, write_temp_page, Launcher, SystemLauncher};
use crate::parser::{self, Separator};
use crate::render::MapDocument;

/// Everything the pipeline needs once flags have been parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub title: String,
    pub separator: Separator,
    /// Explicit destination; a fresh `map-*.html` temp file is used when absent.
    pub output: Option<PathBuf>,
    /// Whether to hand the written page to the launcher.
    pub open: bool,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            title: cli.title.clone(),
            separator: cli.separator,
            output: cli.output.clone(),
            open: !cli.no_open,
        }
    }
}

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let cli = Cli::parse_normalized();
    let options = RunOptions::from(&cli);

    let input = read_input(cli.file.as_deref())?;
    log::debug!("Read {} bytes of input", input.len());

    let path = generate(&input, &options, &SystemLauncher)?;

    if !options.open {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", path.display())?;
    }
    Ok(())
}

/// Parses `input`, renders the page, writes it and, if requested, opens it.
///
/// Returns the path of the written page.
pub fn generate(
    input: &[u8],
    options: &RunOptions,
    launcher: &dyn Launcher,
) -> Result<PathBuf, MapError> {
    if options.open {
        launcher.ensure_supported()?;
    }

    let markers = parser::parse(input, options.separator);
    log::debug!(
        "Parsed {} marker(s) using the {} separator",
        markers.len(),
        options.separator
    );

    let document = MapDocument::new(options.title.clone(), markers);
    let page = crate::render::render_bytes(&document);

    let path = match &options.output {
        Some(path) => {
            write_page(path, &page)?;
            path.clone()
        }
        None => write_temp_page(&page)?,
    };
    log::debug!("Wrote map page to {}", path.display());

    if options.open {
        launcher.open(&path)?;
    }
    Ok(path)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    if let Some(file_path) = path {
        fs::read(file_path)
            .with_context(|| format!("Failed to read input file: {}", file_path.display()))
    } else {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read input from stdin")?;
        Ok(buf)
    }
}
