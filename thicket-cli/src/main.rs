//! Thicket CLI
//!
//! Builds an element tree from a file, a URL or an inline string, then
//! prints the tree or the elements matched by a descendant-selector query.

use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use thicket_common::net::{fetch_markup, is_remote};
use thicket_common::warning::{clear_warnings, set_colored};
use thicket_dom::{DomTree, ElementSummary};
use thicket_html::{BuildIssue, TagVocabulary, TreeBuilder, format_tree};
use thicket_query::{QueryResult, SelectorChain, query};

/// Thicket: parse markup into a tree and query it with descendant selectors
#[derive(Parser, Debug)]
#[command(name = "thicket")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the element tree of a local file
    thicket ./index.html --tree

    # Every link inside a div on a remote page
    thicket https://example.com -q "div a"

    # Inline markup, JSON output
    thicket --html '<div id="a"><p class="x">hi</p></div>' -q "div#a p.x" --format json

    # Custom tag vocabulary
    thicket page.xml --tags tags.json --void-tags void.json -q "note para"
"#)]
struct Cli {
    /// Path to a markup file or an http(s) URL
    #[arg(value_name = "FILE|URL", required_unless_present = "html")]
    source: Option<String>,

    /// Parse this markup string instead of a file or URL
    #[arg(long, value_name = "MARKUP", conflicts_with = "source")]
    html: Option<String>,

    /// Selector query, e.g. "div#main p.note"
    #[arg(short, long, value_name = "SELECTOR")]
    query: Option<String>,

    /// JSON array of known tag names (defaults to the built-in HTML list)
    #[arg(long, value_name = "FILE", requires = "void_tags")]
    tags: Option<PathBuf>,

    /// JSON array of void tag names (defaults to the built-in HTML list)
    #[arg(long, value_name = "FILE", requires = "tags")]
    void_tags: Option<PathBuf>,

    /// Print the element tree (the default when no query is given)
    #[arg(long)]
    tree: bool,

    /// Print issues noticed while building the tree
    #[arg(long)]
    issues: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable blocks
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_colored(!cli.no_color);
    clear_warnings();

    let vocabulary = load_vocabulary(&cli)?;
    let markup = load_markup(&cli)?;
    let (tree, issues) = TreeBuilder::new(&vocabulary).build_with_issues(&markup);

    let chain = cli.query.as_deref().and_then(SelectorChain::parse);
    if cli.tree || cli.query.is_none() {
        print!("{}", render_tree(&cli, &tree)?);
    }
    if cli.query.is_some() {
        let matches = chain
            .as_ref()
            .map(|chain| query(&tree, tree.root(), chain))
            .unwrap_or_default();
        print!("{}", render_matches(&cli, &tree, chain.as_ref(), &matches)?);
    }
    if cli.issues {
        print!("{}", render_issues(&cli, &issues));
    }

    Ok(())
}

/// Load markup from `--html`, a URL, or a file.
///
/// A URL that cannot be fetched is not an error: the fetcher warns and the
/// document is treated as empty.
fn load_markup(cli: &Cli) -> Result<String> {
    if let Some(html) = &cli.html {
        return Ok(html.clone());
    }
    let Some(source) = &cli.source else {
        bail!("a file path, URL, or --html is required");
    };
    if is_remote(source) {
        Ok(fetch_markup(source))
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read '{source}'"))
    }
}

/// The built-in HTML vocabulary, or the one named by `--tags`/`--void-tags`.
fn load_vocabulary(cli: &Cli) -> Result<TagVocabulary> {
    match (&cli.tags, &cli.void_tags) {
        (Some(tags), Some(void_tags)) => Ok(TagVocabulary::from_json_files(tags, void_tags)?),
        (None, None) => Ok(TagVocabulary::html()),
        _ => bail!("--tags and --void-tags must be given together"),
    }
}

fn heading(cli: &Cli, title: &str) -> String {
    let line = format!("=== {title} ===");
    if cli.no_color {
        line
    } else {
        line.bold().to_string()
    }
}

fn render_tree(cli: &Cli, tree: &DomTree) -> Result<String> {
    match cli.format {
        Format::Text => Ok(format!(
            "{}\n{}",
            heading(cli, "Element Tree"),
            format_tree(tree, tree.root())
        )),
        Format::Json => Ok(serde_json::to_string_pretty(tree)? + "\n"),
    }
}

fn render_matches(
    cli: &Cli,
    tree: &DomTree,
    chain: Option<&SelectorChain>,
    matches: &QueryResult,
) -> Result<String> {
    let summaries: Vec<ElementSummary> = matches.iter().filter_map(|&id| tree.describe(id)).collect();

    match cli.format {
        Format::Json => Ok(serde_json::to_string_pretty(&summaries)? + "\n"),
        Format::Text => {
            let query = chain.map_or_else(String::new, ToString::to_string);
            let plural = if summaries.len() == 1 { "" } else { "es" };
            let mut out = heading(cli, &format!("{} match{plural} for `{query}`", summaries.len()));
            out.push('\n');
            for summary in &summaries {
                let _ = writeln!(out, "{summary}");
            }
            Ok(out)
        }
    }
}

fn render_issues(cli: &Cli, issues: &[BuildIssue]) -> String {
    let mut out = heading(cli, "Build Issues");
    out.push('\n');
    for issue in issues {
        let _ = writeln!(out, "  - segment {}: {}", issue.segment_index, issue.message);
    }
    out
}
