//! Markdown compiler: parses task text into a [`MarkdownNode`] tree and
//! compiles it into the styled layout blocks the renderer consumes.
//!
//! Both stages are pure: identical `(markdown, family)` input always
//! yields an identical tree, and nothing here can fail — event types
//! without a counterpart in the node set are dropped silently.

use crate::models::markdown::{
    BULLET_GLYPH, FontFamily, InlineRun, LayoutBlock, ListItemBlock, MarkdownNode,
};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

// ---------------------------------------------------------------------
// Stage 1: event stream → AST
// ---------------------------------------------------------------------

/// An open container while walking the event stream. `Ignored` swallows
/// everything inside an unsupported tag (links, images, tables, ...).
enum Frame {
    Paragraph(Vec<MarkdownNode>),
    Heading(u8, Vec<MarkdownNode>),
    Strong(Vec<MarkdownNode>),
    Emphasis(Vec<MarkdownNode>),
    List {
        ordered: bool,
        items: Vec<MarkdownNode>,
    },
    Item(Vec<MarkdownNode>),
    Blockquote(Vec<MarkdownNode>),
    CodeBlock(String),
    Ignored,
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

struct TreeBuilder {
    stack: Vec<Frame>,
    root: Vec<MarkdownNode>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: Vec::new(),
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::Paragraph(Vec::new()),
            Tag::Heading { level, .. } => Frame::Heading(heading_depth(level), Vec::new()),
            Tag::Strong => Frame::Strong(Vec::new()),
            Tag::Emphasis => Frame::Emphasis(Vec::new()),
            Tag::List(start) => Frame::List {
                ordered: start.is_some(),
                items: Vec::new(),
            },
            Tag::Item => Frame::Item(Vec::new()),
            Tag::BlockQuote(_) => Frame::Blockquote(Vec::new()),
            Tag::CodeBlock(_) => Frame::CodeBlock(String::new()),
            _ => Frame::Ignored,
        };
        self.stack.push(frame);
    }

    /// Close the innermost container. Events are well nested, so the
    /// frame on top is always the one being closed.
    fn close(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };

        let node = match frame {
            Frame::Paragraph(children) => Some(MarkdownNode::Paragraph { children }),
            Frame::Heading(depth, children) => Some(MarkdownNode::Heading { depth, children }),
            Frame::Strong(children) => Some(MarkdownNode::Strong { children }),
            Frame::Emphasis(children) => Some(MarkdownNode::Emphasis { children }),
            Frame::List { ordered, mut items } => {
                if ordered {
                    // Number by position, ignoring the source's start
                    // value: "3. a\n4. b" still labels 1., 2.
                    let mut n = 0u64;
                    for item in items.iter_mut() {
                        if let MarkdownNode::ListItem { index, .. } = item {
                            n += 1;
                            *index = Some(n);
                        }
                    }
                }
                Some(MarkdownNode::List { ordered, items })
            }
            Frame::Item(children) => Some(MarkdownNode::ListItem {
                index: None,
                children,
            }),
            Frame::Blockquote(children) => Some(MarkdownNode::Blockquote { children }),
            Frame::CodeBlock(literal) => Some(MarkdownNode::Code {
                literal: literal.trim_end_matches('\n').to_string(),
            }),
            Frame::Ignored => None,
        };

        if let Some(node) = node {
            self.attach(node);
        }
    }

    fn attach(&mut self, node: MarkdownNode) {
        match self.stack.last_mut() {
            Some(Frame::Paragraph(children))
            | Some(Frame::Heading(_, children))
            | Some(Frame::Strong(children))
            | Some(Frame::Emphasis(children))
            | Some(Frame::Item(children))
            | Some(Frame::Blockquote(children)) => children.push(node),
            Some(Frame::List { items, .. }) => items.push(node),
            Some(Frame::CodeBlock(literal)) => {
                if let MarkdownNode::Text { literal: t } = node {
                    literal.push_str(&t);
                }
            }
            Some(Frame::Ignored) => {}
            None => self.root.push(node),
        }
    }

    fn text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame::CodeBlock(literal)) => literal.push_str(text),
            Some(Frame::Ignored) => {}
            _ => self.attach(MarkdownNode::Text {
                literal: text.to_string(),
            }),
        }
    }
}

/// Parse markdown text into the closed AST. Total: arbitrary text always
/// yields a tree, unsupported constructs simply vanish.
pub fn parse_markdown(markdown: &str) -> Vec<MarkdownNode> {
    let mut builder = TreeBuilder::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(tag) => builder.open(tag),
            Event::End(_) => builder.close(),
            Event::Text(text) => builder.text(&text),
            Event::Code(code) => builder.attach(MarkdownNode::InlineCode {
                literal: code.to_string(),
            }),
            Event::SoftBreak => builder.text(" "),
            Event::HardBreak => builder.attach(MarkdownNode::Break),
            // Rules, HTML, math, footnotes, task markers: no counterpart
            _ => {}
        }
    }

    builder.root
}

// ---------------------------------------------------------------------
// Stage 2: AST → styled layout blocks
// ---------------------------------------------------------------------

/// Inline style state while flattening a subtree into runs.
#[derive(Clone, Copy)]
struct StyleCtx {
    family: FontFamily,
    bold: bool,
    italic: bool,
}

fn push_runs(nodes: &[MarkdownNode], ctx: StyleCtx, out: &mut Vec<InlineRun>) {
    for node in nodes {
        match node {
            MarkdownNode::Text { literal } => {
                out.push(InlineRun::styled(
                    literal.clone(),
                    ctx.family,
                    ctx.bold,
                    ctx.italic,
                ));
            }
            MarkdownNode::Strong { children } => {
                push_runs(children, StyleCtx { bold: true, ..ctx }, out);
            }
            MarkdownNode::Emphasis { children } => {
                push_runs(
                    children,
                    StyleCtx {
                        italic: true,
                        ..ctx
                    },
                    out,
                );
            }
            // Code ignores the surrounding emphasis entirely
            MarkdownNode::InlineCode { literal } => out.push(InlineRun::code(literal.clone())),
            MarkdownNode::Break => {
                out.push(InlineRun::styled(
                    "\n".to_string(),
                    ctx.family,
                    ctx.bold,
                    ctx.italic,
                ));
            }
            // Paragraphs inside loose list items flatten into the runs,
            // separated by a line break
            MarkdownNode::Paragraph { children } => {
                if !out.is_empty() {
                    out.push(InlineRun::styled(
                        "\n".to_string(),
                        ctx.family,
                        false,
                        false,
                    ));
                }
                push_runs(children, ctx, out);
            }
            _ => {}
        }
    }
}

fn inline_runs(nodes: &[MarkdownNode], family: FontFamily) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    push_runs(
        nodes,
        StyleCtx {
            family,
            bold: false,
            italic: false,
        },
        &mut runs,
    );
    runs
}

fn item_bullet(index: Option<u64>) -> String {
    match index {
        Some(n) => format!("{n}."),
        None => BULLET_GLYPH.to_string(),
    }
}

fn compile_blocks(nodes: &[MarkdownNode], family: FontFamily) -> Vec<LayoutBlock> {
    let mut blocks = Vec::new();

    for node in nodes {
        match node {
            MarkdownNode::Paragraph { children } => blocks.push(LayoutBlock::Paragraph {
                runs: inline_runs(children, family),
            }),
            MarkdownNode::Heading { depth, children } => blocks.push(LayoutBlock::Heading {
                depth: *depth,
                runs: inline_runs(children, family),
            }),
            MarkdownNode::List { ordered, items } => {
                let items = items
                    .iter()
                    .filter_map(|item| match item {
                        MarkdownNode::ListItem { index, children } => Some(ListItemBlock {
                            bullet: item_bullet(*index),
                            runs: inline_runs(children, family),
                        }),
                        _ => None,
                    })
                    .collect();
                blocks.push(LayoutBlock::List {
                    ordered: *ordered,
                    items,
                });
            }
            MarkdownNode::Blockquote { children } => blocks.push(LayoutBlock::Blockquote {
                blocks: compile_blocks(children, family),
            }),
            MarkdownNode::Code { literal } => blocks.push(LayoutBlock::CodeBlock {
                literal: literal.clone(),
            }),
            // Stray inline content at block level: wrap it like the
            // renderer would a paragraph
            MarkdownNode::Text { .. }
            | MarkdownNode::Strong { .. }
            | MarkdownNode::Emphasis { .. }
            | MarkdownNode::InlineCode { .. } => blocks.push(LayoutBlock::Paragraph {
                runs: inline_runs(std::slice::from_ref(node), family),
            }),
            MarkdownNode::ListItem { .. } | MarkdownNode::Break => {}
        }
    }

    blocks
}

/// Compile markdown text into styled layout blocks for the given family.
pub fn compile_markdown(markdown: &str, family: FontFamily) -> Vec<LayoutBlock> {
    let tree = parse_markdown(markdown);
    compile_blocks(&tree, family)
}
