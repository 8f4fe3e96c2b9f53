use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdabbr")]
#[command(author, version)]
#[command(about = "Markdown abbreviations: parse, render and lint *[LABEL]: definitions")]
#[command(
    long_about = "mdabbr parses Markdown documents with abbreviation definitions such as \
    `*[HTML]: Hyper Text Markup Language`, finds every word-bounded occurrence of a defined \
    label and turns it into an abbreviation reference. Documents can be rendered to HTML \
    (`<abbr title=\"...\">`), reformatted, linted or dumped as a syntax tree."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to HTML
    mdabbr html document.md

    # Render from stdin
    cat document.md | mdabbr html

    # Show the syntax tree as mdast JSON
    mdabbr parse --json document.md

    # Check if a file is formatted
    mdabbr format --check document.md

    # Lint abbreviation definitions
    mdabbr lint document.md

CONFIGURATION:

mdabbr looks for configuration files in this order:
  1. Explicit --config path
  2. mdabbr.toml or .mdabbr.toml in current/parent directories
  3. ~/.config/mdabbr/config.toml (XDG)
  4. Built-in defaults

Example .mdabbr.toml:

    line_ending = \"lf\"

    [extensions]
    abbreviations = true
    intraword_underscores = true

    [html]
    definitions = \"comment\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, mdabbr will \
        search for .mdabbr.toml or mdabbr.toml in the current directory and its parents, \
        then fall back to ~/.config/mdabbr/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and display the syntax tree for debugging
    #[command(
        long_about = "Parse a document and display its concrete syntax tree, which holds every \
        byte of the input including definition markers and whitespace. With --json, print the \
        mdast tree with abbreviation references resolved and source positions instead."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Show the concrete syntax tree
    mdabbr parse document.md

    # Show mdast JSON
    echo 'HTML\n\n*[HTML]: Hyper Text Markup Language' | mdabbr parse --json")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Print mdast JSON instead of the concrete syntax tree
        #[arg(long)]
        json: bool,
    },
    /// Render a document to HTML
    #[command(
        long_about = "Render a document to HTML on stdout. Abbreviation references become \
        <abbr title=\"...\"> elements. Definitions are left out unless the [html] definitions \
        setting is \"comment\"."
    )]
    Html {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Format a document
    #[command(
        long_about = "Format a document: one blank line between blocks, ATX headings, backtick \
        fences and one `*[label]: title` line per definition. Files are formatted in place; \
        stdin is formatted to stdout. Use --check to verify formatting without making changes."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Format in place
    mdabbr format document.md

    # Format from stdin
    echo '*[HTML]:   Hyper Text' | mdabbr format

    # Check formatting (exit code 1 if not formatted)
    mdabbr format --check document.md")]
    Format {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Check if files are formatted without making changes
        #[arg(long)]
        #[arg(help = "Check if file is formatted (exit code 1 if not)")]
        #[arg(
            long_help = "Check if the file is already formatted without making any changes. \
            If the file is not formatted, displays a diff and exits with code 1."
        )]
        check: bool,
    },
    /// Lint abbreviation definitions and their use
    #[command(
        long_about = "Report duplicate abbreviation labels, definitions that are never used \
        and definitions with an empty title."
    )]
    Lint {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Exit with code 1 if any issue is found
        #[arg(long)]
        check: bool,
    },
}
