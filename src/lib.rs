pub mod config;
pub mod linter;

pub use config::Config;
pub use config::ConfigBuilder;
pub use config::LineEnding;
pub use mdabbr_mdast::{Node, NodeKind, Point, Position};
pub use mdabbr_parser::{AbbrEntry, AbbrRegistry, Extensions, SyntaxKind, SyntaxNode};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn detect_line_ending(input: &str) -> &str {
    // Check for first occurrence of \r\n or \n
    let rn_pos = input.find("\r\n");
    let n_pos = input.find('\n');

    if let (Some(rn), Some(n)) = (rn_pos, n_pos) {
        if rn < n {
            return "\r\n";
        }
    } else if rn_pos.is_some() {
        return "\r\n";
    }

    "\n"
}

/// Everything the pipeline knows about one document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Lossless concrete syntax tree
    pub cst: SyntaxNode,
    /// Syntax tree with abbreviation references resolved
    pub mdast: Node,
    /// Every definition in document order
    pub registry: AbbrRegistry,
    /// Number of references the resolver created
    pub references: usize,
}

/// Parses a document into a lossless concrete syntax tree.
///
/// # Examples
///
/// ```rust
/// use mdabbr::parse;
///
/// let input = "HTML is fun\n\n*[HTML]: Hyper Text Markup Language\n";
/// let tree = parse(input, None);
/// assert_eq!(tree.text().to_string(), input);
/// ```
pub fn parse(input: &str, config: Option<Config>) -> SyntaxNode {
    let config = config.unwrap_or_default();
    let (tree, _) = mdabbr_parser::parse(input, &config.extensions);
    tree
}

/// Runs the full pipeline: block and inline parsing, lowering to the
/// syntax tree and abbreviation resolution.
pub fn parse_document(input: &str, config: &Config) -> Document {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let (cst, registry) = mdabbr_parser::parse(input, &config.extensions);
    let mut mdast = mdabbr_mdast::compile(&cst);
    let references = mdabbr_mdast::resolve_abbreviations(&mut mdast);
    log::debug!(
        "Parsed {} definition(s), resolved {} reference(s)",
        registry.len(),
        references
    );

    Document {
        cst,
        mdast,
        registry,
        references,
    }
}

/// Parses a document into a syntax tree with abbreviation references
/// resolved.
///
/// # Examples
///
/// ```rust
/// use mdabbr::{NodeKind, to_mdast};
///
/// let tree = to_mdast("HTML\n\n*[HTML]: Hyper Text Markup Language", None);
/// let paragraph = &tree.children().unwrap()[0];
/// assert_eq!(paragraph.children().unwrap()[0].kind(), NodeKind::AbbrReference);
/// ```
pub fn to_mdast(input: &str, config: Option<Config>) -> Node {
    parse_document(input, &config.unwrap_or_default()).mdast
}

/// Renders a document to HTML, turning abbreviation references into
/// `<abbr>` elements.
pub fn to_html(input: &str, config: Option<Config>) -> String {
    let config = config.unwrap_or_default();
    let document = parse_document(input, &config);
    mdabbr_mdast::to_html(&document.mdast, &config.html.options())
}

/// Formats a document: one blank line between blocks, definitions written
/// as `*[label]: title`, ATX headings and backtick fences.
///
/// The output line ending follows `config.line_ending`; `Auto` keeps the
/// one the input starts with.
pub fn format(input: &str, config: Option<Config>) -> String {
    let config = config.unwrap_or_default();

    let line_ending = match config.line_ending {
        Some(LineEnding::Lf) => "\n",
        Some(LineEnding::Crlf) => "\r\n",
        Some(LineEnding::Auto) | None => detect_line_ending(input),
    };

    let normalized_input = input.replace("\r\n", "\n");
    let document = parse_document(&normalized_input, &config);
    let out = mdabbr_mdast::to_markdown(&document.mdast);

    if line_ending == "\r\n" {
        out.replace('\n', "\r\n")
    } else {
        out
    }
}
