mod site;
mod system;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use copytext::{CopyTextService, Node, Options};
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::site::{config_for_host, SITES};
use crate::system::SystemClipboard;

/// Copy a section of an HTML page as Markdown and sanitized HTML
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// HTML file to read; stdin when absent or `-`
    input: Option<PathBuf>,

    /// Page URL, used for site lookup and to resolve relative links
    #[arg(long)]
    url: Option<String>,

    /// CSS selector of the section to copy (repeatable); overrides the site table
    #[arg(long = "selector", short = 's')]
    selectors: Vec<String>,

    /// Which of the matched sections to copy
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Print the Markdown instead of writing the clipboard
    #[arg(long)]
    print: bool,

    /// Print the sanitized HTML instead of writing the clipboard
    #[arg(long, conflicts_with = "print")]
    html: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let page = read_input(cli.input.as_ref())?;
    let page_url = cli
        .url
        .as_deref()
        .map(|url| Url::parse(url).with_context(|| format!("invalid page URL {url:?}")))
        .transpose()?;

    let options = match &cli.url {
        Some(url) => Options::with_base_url(url)?,
        None => Options::default(),
    };
    let service = CopyTextService::with_options(options);

    let target = find_target(&page, page_url.as_ref(), &cli.selectors, cli.index)?;

    if cli.print {
        println!("{}", service.serialize(&service.sanitize(&target)));
        return Ok(true);
    }
    if cli.html {
        println!("{}", service.sanitize(&target).inner_html());
        return Ok(true);
    }

    let mut clipboard = match SystemClipboard::open() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            tracing::error!("Failed to copy: {}", err);
            return Ok(false);
        }
    };
    let copied = smol::block_on(service.build_and_dispatch(&target, &mut clipboard));
    if copied {
        eprintln!("Copied section {} to the clipboard", cli.index);
    }
    Ok(copied)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut page = String::new();
            io::stdin()
                .read_to_string(&mut page)
                .context("failed to read stdin")?;
            Ok(page)
        }
    }
}

/// Pick the section to copy.
///
/// Explicit selectors win, then the site table for the page host; with
/// neither, the whole document is the target.
fn find_target(
    page: &str,
    page_url: Option<&Url>,
    selectors: &[String],
    index: usize,
) -> Result<Node> {
    let selectors: Vec<String> = if !selectors.is_empty() {
        selectors.to_vec()
    } else if let Some(url) = page_url {
        let host = url.host_str().unwrap_or_default();
        let Some(site) = config_for_host(SITES, host) else {
            bail!("no site configuration for {host:?}");
        };
        tracing::info!("Using site configuration for {}", site.hostname);
        site.selectors.iter().map(|s| s.to_string()).collect()
    } else {
        return Ok(copytext::parse_document(page));
    };

    let matches = copytext::select_all(page, &selectors);
    let found = matches.len();
    match matches.into_iter().nth(index) {
        Some(node) => Ok(node),
        None => bail!("section {index} not found ({found} matched {selectors:?})"),
    }
}
