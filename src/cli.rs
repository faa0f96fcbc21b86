//! Defines the command-line interface for the application.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use crate::parser::Separator;

/// Long options that are also accepted with a single leading dash
/// (`-title Trip`, `-separator=comma`).
const SINGLE_DASH_LONG: &[&str] = &["title", "separator", "file", "output"];

#[derive(Parser, Debug)]
#[command(
    name = "pinmap",
    version,
    about = "Plot latitude/longitude records from stdin on an interactive world map."
)]
pub struct Cli {
    /// Main title of the generated HTML page.
    #[arg(short, long, value_name = "TITLE", default_value = "World Map")]
    pub title: String,

    /// Field separator used in the input records: 'tab' or 'comma'.
    #[arg(
        short,
        long,
        value_name = "SEPARATOR",
        default_value = "tab",
        value_parser = Separator::from_str
    )]
    pub separator: Separator,

    /// Read records from a file instead of stdin.
    #[arg(short, long, value_name = "FILE_PATH")]
    pub file: Option<PathBuf>,

    /// Write the page to this path instead of a temporary file.
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Do not open a browser; print the path of the written page instead.
    #[arg(long)]
    pub no_open: bool,
}

impl Cli {
    /// Parses the process arguments, accepting single-dash long options.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites `-title`, `-separator`, `-file` and `-output` (bare or with
/// `=value`) into their double-dash form. Option values and anything after
/// `--` are passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expects_value = false;
    let mut options_ended = false;

    for (index, arg) in args.into_iter().map(Into::into).enumerate() {
        if index == 0 || options_ended || expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        let arg = match arg.to_str().and_then(rewrite_single_dash) {
            Some(rewritten) => OsString::from(rewritten),
            None => arg,
        };

        if let Some(text) = arg.to_str() {
            options_ended = text == "--";
            expects_value = takes_separate_value(text);
        }
        normalized.push(arg);
    }
    normalized
}

fn rewrite_single_dash(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONG
        .contains(&name)
        .then(|| format!("-{arg}"))
}

fn takes_separate_value(arg: &str) -> bool {
    matches!(
        arg,
        "--title" | "--separator" | "--file" | "--output" | "-t" | "-s" | "-f" | "-o"
    )
}
