use crate::options::Extensions;
use crate::syntax::{SyntaxKind, SyntaxNode};
use rowan::GreenNodeBuilder;

pub mod abbreviations;
mod code_blocks;
mod headings;
mod horizontal_rules;
pub(crate) mod utils;

pub use abbreviations::{AbbrDefinitionConstruct, AbbrEntry, AbbrRegistry};
use abbreviations::{definition_parts, emit_abbr_definition, try_parse_abbr_definition};
use code_blocks::{parse_fenced_code_block, try_parse_fence_open};
use headings::{emit_atx_heading, try_parse_atx_heading};
use horizontal_rules::{emit_horizontal_rule, try_parse_horizontal_rule};
use utils::{split_leading_whitespace, split_lines_inclusive, strip_newline};

pub struct BlockParser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    /// Byte offset of `lines[pos]` in the input.
    offset: usize,
    builder: GreenNodeBuilder<'static>,
    /// Lines of the paragraph that is currently open.
    paragraph: Vec<&'a str>,
    registry: AbbrRegistry,
    extensions: &'a Extensions,
}

impl<'a> BlockParser<'a> {
    pub fn new(input: &'a str, extensions: &'a Extensions) -> Self {
        // Use split_lines_inclusive to preserve line endings (both LF and CRLF)
        let lines = split_lines_inclusive(input);
        Self {
            lines,
            pos: 0,
            offset: 0,
            builder: GreenNodeBuilder::new(),
            paragraph: Vec::new(),
            registry: AbbrRegistry::new(),
            extensions,
        }
    }

    pub fn parse(mut self) -> (SyntaxNode, AbbrRegistry) {
        self.builder.start_node(SyntaxKind::DOCUMENT.into());

        log::debug!("Starting document parse");

        while self.pos < self.lines.len() {
            let consumed = self.parse_line();
            for line in &self.lines[self.pos..self.pos + consumed] {
                self.offset += line.len();
            }
            self.pos += consumed;
        }

        self.close_paragraph();
        self.builder.finish_node(); // DOCUMENT

        log::debug!(
            "Finished document parse: {} abbreviation definition(s)",
            self.registry.len()
        );

        let tree = SyntaxNode::new_root(self.builder.finish());
        (tree, self.registry)
    }

    /// Parse the block starting at the current line. Returns the number of lines consumed.
    fn parse_line(&mut self) -> usize {
        let line = self.lines[self.pos];
        let (content, newline) = strip_newline(line);

        log::trace!("Parsing line {}: {:?}", self.pos + 1, line);

        if content.trim().is_empty() {
            self.close_paragraph();
            self.builder.start_node(SyntaxKind::BLANK_LINE_NODE.into());
            self.builder.token(SyntaxKind::BLANK_LINE.into(), line);
            self.builder.finish_node();
            return 1;
        }

        if self.extensions.fenced_code_blocks
            && let Some(fence) = try_parse_fence_open(line)
        {
            self.close_paragraph();
            return parse_fenced_code_block(&mut self.builder, &self.lines, self.pos, &fence);
        }

        if let Some(level) = try_parse_atx_heading(content) {
            self.close_paragraph();
            emit_atx_heading(&mut self.builder, content, level);
            self.emit_newline(newline);
            return 1;
        }

        if try_parse_horizontal_rule(content).is_some() {
            self.close_paragraph();
            emit_horizontal_rule(&mut self.builder, content);
            self.emit_newline(newline);
            return 1;
        }

        if self.paragraph.is_empty() && self.extensions.abbreviations && self.try_abbr_definition(line)
        {
            return 1;
        }

        self.paragraph.push(line);
        1
    }

    /// Abbreviation definitions can only start a content block, so this is
    /// never tried while a paragraph is open.
    fn try_abbr_definition(&mut self, line: &str) -> bool {
        let (indent, rest) = split_leading_whitespace(line);
        if indent.len() > 3 || indent.contains('\t') {
            return false;
        }
        let Some(result) = try_parse_abbr_definition(rest) else {
            return false;
        };

        let (label, value) = definition_parts(&result, rest);
        let start = self.offset + indent.len();
        log::debug!("Abbreviation definition {:?} => {:?}", label, value);
        self.registry.add(label, value, start..start + result.len());

        if !indent.is_empty() {
            self.builder.token(SyntaxKind::WHITESPACE.into(), indent);
        }
        emit_abbr_definition(&mut self.builder, &result, rest);
        true
    }

    fn close_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.paragraph);
        let last = lines.len() - 1;

        let (indent, first) = split_leading_whitespace(lines[0]);
        if !indent.is_empty() {
            self.builder.token(SyntaxKind::WHITESPACE.into(), indent);
        }

        self.builder.start_node(SyntaxKind::PARAGRAPH.into());
        let mut trailing_newline = "";
        for (i, &line) in lines.iter().enumerate() {
            let line = if i == 0 { first } else { line };
            let (text, newline) = strip_newline(line);
            if !text.is_empty() {
                self.builder.token(SyntaxKind::TEXT.into(), text);
            }
            if i == last {
                trailing_newline = newline;
            } else if !newline.is_empty() {
                self.builder.token(SyntaxKind::NEWLINE.into(), newline);
            }
        }
        self.builder.finish_node(); // PARAGRAPH

        self.emit_newline(trailing_newline);
    }

    fn emit_newline(&mut self, newline: &str) {
        if !newline.is_empty() {
            self.builder.token(SyntaxKind::NEWLINE.into(), newline);
        }
    }
}

#[cfg(test)]
mod tests;
