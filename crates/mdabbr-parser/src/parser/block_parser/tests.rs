use super::BlockParser;
use crate::options::Extensions;
use crate::syntax::{AbbrDefinition, AstNode, CodeBlock, Heading, SyntaxKind, SyntaxNode};

fn parse_blocks(input: &str) -> (SyntaxNode, super::AbbrRegistry) {
    let extensions = Extensions::default();
    BlockParser::new(input, &extensions).parse()
}

fn block_kinds(input: &str) -> Vec<SyntaxKind> {
    let (tree, _) = parse_blocks(input);
    assert_eq!(tree.text().to_string(), input, "tree must be lossless");
    tree.children().map(|n| n.kind()).collect()
}

fn find_first(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.descendants().find(|n| n.kind() == kind)
}

#[test]
fn blankline_between_paragraphs() {
    assert_eq!(
        block_kinds("Paragraph 1\n\nParagraph 2\n"),
        vec![
            SyntaxKind::PARAGRAPH,
            SyntaxKind::BLANK_LINE_NODE,
            SyntaxKind::PARAGRAPH,
        ]
    );
}

#[test]
fn paragraph_excludes_final_newline() {
    let (tree, _) = parse_blocks("one\ntwo\n");
    let paragraph = find_first(&tree, SyntaxKind::PARAGRAPH).unwrap();
    assert_eq!(paragraph.text().to_string(), "one\ntwo");
    assert_eq!(
        tree.last_token().map(|t| t.kind()),
        Some(SyntaxKind::NEWLINE)
    );
}

#[test]
fn definition_after_paragraph() {
    let input = "I like to use HTML because it is cool\n\n*[HTML]: Hyper Text Markup Language";
    assert_eq!(
        block_kinds(input),
        vec![
            SyntaxKind::PARAGRAPH,
            SyntaxKind::BLANK_LINE_NODE,
            SyntaxKind::ABBR_DEFINITION,
        ]
    );

    let (tree, registry) = parse_blocks(input);
    let definition = find_first(&tree, SyntaxKind::ABBR_DEFINITION)
        .and_then(AbbrDefinition::cast)
        .unwrap();
    assert_eq!(definition.label(), "HTML");
    assert_eq!(definition.value(), "Hyper Text Markup Language");

    let entry = registry.get("HTML").unwrap();
    assert_eq!(entry.range, 39..74);
    assert_eq!(&input[entry.range.clone()], "*[HTML]: Hyper Text Markup Language");
}

#[test]
fn definition_alone() {
    assert_eq!(
        block_kinds("*[HTML]: Hyper Text Markup Language"),
        vec![SyntaxKind::ABBR_DEFINITION]
    );
}

#[test]
fn consecutive_definitions() {
    let input = "*[HTML]: Hyper Text Markup Language\n*[W3C]: World Wide Web Consortium\n";
    assert_eq!(
        block_kinds(input),
        vec![SyntaxKind::ABBR_DEFINITION, SyntaxKind::ABBR_DEFINITION]
    );
    let (_, registry) = parse_blocks(input);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.definitions()[1].range, 36..69);
}

#[test]
fn definition_inside_paragraph_is_text() {
    let input = "Some text\n*[HTML]: Hyper Text Markup Language\n";
    assert_eq!(block_kinds(input), vec![SyntaxKind::PARAGRAPH]);
    let (_, registry) = parse_blocks(input);
    assert!(registry.is_empty());
}

#[test]
fn definition_does_not_continue() {
    let input = "*[HTML]: Hyper Text\nMarkup Language\n";
    assert_eq!(
        block_kinds(input),
        vec![SyntaxKind::ABBR_DEFINITION, SyntaxKind::PARAGRAPH]
    );
}

#[test]
fn empty_label_falls_back_to_paragraph() {
    let input = "*[]: Empty\n";
    assert_eq!(block_kinds(input), vec![SyntaxKind::PARAGRAPH]);
    let (_, registry) = parse_blocks(input);
    assert!(registry.is_empty());
}

#[test]
fn indented_definition() {
    let input = "   *[A]: alpha\n";
    let (tree, registry) = parse_blocks(input);
    assert_eq!(tree.text().to_string(), input);
    assert_eq!(registry.get("A").unwrap().range, 3..14);

    let input = "    *[A]: alpha\n";
    assert_eq!(block_kinds(input), vec![SyntaxKind::PARAGRAPH]);
}

#[test]
fn definitions_disabled() {
    let extensions = Extensions {
        abbreviations: false,
        ..Default::default()
    };
    let (tree, registry) = BlockParser::new("*[A]: alpha\n", &extensions).parse();
    assert!(registry.is_empty());
    assert!(find_first(&tree, SyntaxKind::PARAGRAPH).is_some());
}

#[test]
fn duplicate_definitions_are_all_kept() {
    let input = "*[A]: first\n*[A]: second\n";
    let (tree, registry) = parse_blocks(input);
    assert_eq!(
        tree.children()
            .filter(|n| n.kind() == SyntaxKind::ABBR_DEFINITION)
            .count(),
        2
    );
    assert_eq!(registry.get("A").unwrap().value, "second");
    assert_eq!(registry.duplicates().len(), 1);
}

#[test]
fn crlf_definition() {
    let input = "*[A]: alpha\r\ntext\r\n";
    let (tree, registry) = parse_blocks(input);
    assert_eq!(tree.text().to_string(), input);
    assert_eq!(registry.get("A").unwrap().value, "alpha");
}

#[test]
fn heading_levels_and_closing_sequence() {
    let input = "## Title ##\n";
    assert_eq!(block_kinds(input), vec![SyntaxKind::HEADING]);
    let (tree, _) = parse_blocks(input);
    let heading = find_first(&tree, SyntaxKind::HEADING)
        .and_then(Heading::cast)
        .unwrap();
    assert_eq!(heading.level(), 2);
    assert_eq!(heading.content().unwrap().text().to_string(), "Title");
}

#[test]
fn heading_interrupts_paragraph() {
    assert_eq!(
        block_kinds("text\n# Heading\nmore"),
        vec![
            SyntaxKind::PARAGRAPH,
            SyntaxKind::HEADING,
            SyntaxKind::PARAGRAPH
        ]
    );
}

#[test]
fn thematic_breaks() {
    assert_eq!(
        block_kinds("***\n---\n_ _ _"),
        vec![
            SyntaxKind::HORIZONTAL_RULE,
            SyntaxKind::HORIZONTAL_RULE,
            SyntaxKind::HORIZONTAL_RULE,
        ]
    );
}

#[test]
fn fenced_code_block() {
    let input = "```rust\nlet x = 1;\n*[A]: not a definition\n```\n";
    assert_eq!(block_kinds(input), vec![SyntaxKind::CODE_BLOCK]);

    let (tree, registry) = parse_blocks(input);
    assert!(registry.is_empty());
    let code = find_first(&tree, SyntaxKind::CODE_BLOCK)
        .and_then(CodeBlock::cast)
        .unwrap();
    assert_eq!(code.info().as_deref(), Some("rust"));
    assert_eq!(code.language().as_deref(), Some("rust"));
    assert_eq!(code.content(), "let x = 1;\n*[A]: not a definition\n");
    assert_eq!(
        code.syntax().text().to_string(),
        "```rust\nlet x = 1;\n*[A]: not a definition\n```"
    );
}

#[test]
fn unclosed_fence_runs_to_end() {
    let input = "~~~\ncode\nmore\n";
    let (tree, _) = parse_blocks(input);
    assert_eq!(tree.text().to_string(), input);
    let code = find_first(&tree, SyntaxKind::CODE_BLOCK)
        .and_then(CodeBlock::cast)
        .unwrap();
    assert_eq!(code.content(), "code\nmore");
    assert_eq!(code.info(), None);
}

#[test]
fn losslessness() {
    for input in [
        "",
        "\n",
        "  indented paragraph\n  continued\n",
        "# \n",
        "*[HTML]:\n",
        "*[HTML]: value  \n\n\ttext",
        "```\n",
        "text\r\n\r\n*[A]: b\r",
        "* not a definition",
    ] {
        let (tree, _) = parse_blocks(input);
        assert_eq!(tree.text().to_string(), input);
    }
}

#[test]
fn definition_cst_shape() {
    let (tree, _) = parse_blocks("*[HTML]: Hyper Text\n");
    insta::assert_snapshot!(format!("{:#?}", tree), @r#"
    DOCUMENT@0..20
      ABBR_DEFINITION@0..19
        ABBR_DEFINITION_MARKER@0..1 "*"
        ABBR_DEFINITION_LABEL@1..7
          ABBR_DEFINITION_MARKER@1..2 "["
          ABBR_DEFINITION_STRING@2..6
            TEXT@2..6 "HTML"
          ABBR_DEFINITION_MARKER@6..7 "]"
        ABBR_DEFINITION_MARKER@7..8 ":"
        WHITESPACE@8..9 " "
        ABBR_DEFINITION_VALUE@9..19
          TEXT@9..19 "Hyper Text"
      NEWLINE@19..20 "\n"
    "#);
}
