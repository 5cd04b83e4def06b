//! Markdown document model: the parsed AST and the styled layout tree
//! the renderer consumes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Glyph placed before unordered list items.
pub const BULLET_GLYPH: &str = "•";

/// Font families available for the document body. Code spans and code
/// blocks always resolve to [`FontFamily::MONOSPACE`] regardless of the
/// selected family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Helvetica,
    TimesRoman,
    Courier,
}

impl FontFamily {
    /// Fixed monospace face for inline and block code.
    pub const MONOSPACE: &'static str = "Courier";

    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::TimesRoman => "Times-Roman",
            FontFamily::Courier => "Courier",
        }
    }

    /// Resolve the face name for an emphasis combination, in the
    /// standard PDF base-14 naming scheme.
    pub fn face(&self, bold: bool, italic: bool) -> &'static str {
        match self {
            FontFamily::Helvetica => match (bold, italic) {
                (false, false) => "Helvetica",
                (true, false) => "Helvetica-Bold",
                (false, true) => "Helvetica-Oblique",
                (true, true) => "Helvetica-BoldOblique",
            },
            FontFamily::TimesRoman => match (bold, italic) {
                (false, false) => "Times-Roman",
                (true, false) => "Times-Bold",
                (false, true) => "Times-Italic",
                (true, true) => "Times-BoldItalic",
            },
            FontFamily::Courier => match (bold, italic) {
                (false, false) => "Courier",
                (true, false) => "Courier-Bold",
                (false, true) => "Courier-Oblique",
                (true, true) => "Courier-BoldOblique",
            },
        }
    }
}

/// Markdown AST, as a closed tagged tree. Anything the parser emits that
/// has no counterpart here is dropped silently, keeping the compiler a
/// total function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkdownNode {
    Paragraph {
        children: Vec<MarkdownNode>,
    },
    Heading {
        depth: u8,
        children: Vec<MarkdownNode>,
    },
    Strong {
        children: Vec<MarkdownNode>,
    },
    Emphasis {
        children: Vec<MarkdownNode>,
    },
    List {
        ordered: bool,
        items: Vec<MarkdownNode>,
    },
    ListItem {
        /// 1-based position within an ordered list, None for bullets.
        index: Option<u64>,
        children: Vec<MarkdownNode>,
    },
    Blockquote {
        children: Vec<MarkdownNode>,
    },
    Code {
        literal: String,
    },
    InlineCode {
        literal: String,
    },
    Text {
        literal: String,
    },
    Break,
}

/// A run of text with its resolved style. Runs are the leaves of the
/// layout tree; the renderer only ever draws runs and block frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineRun {
    pub text: String,
    /// Resolved face name (family variant, or the monospace face).
    pub face: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl InlineRun {
    pub fn styled(text: String, family: FontFamily, bold: bool, italic: bool) -> Self {
        Self {
            text,
            face: family.face(bold, italic).to_string(),
            bold,
            italic,
            code: false,
        }
    }

    pub fn code(text: String) -> Self {
        Self {
            text,
            face: FontFamily::MONOSPACE.to_string(),
            bold: false,
            italic: false,
            code: true,
        }
    }
}

/// One list item: the bullet label ("•" or "1.") is a sibling of the
/// item's runs, never embedded in them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItemBlock {
    pub bullet: String,
    pub runs: Vec<InlineRun>,
}

/// Renderer-agnostic styled block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum LayoutBlock {
    Paragraph {
        runs: Vec<InlineRun>,
    },
    Heading {
        depth: u8,
        runs: Vec<InlineRun>,
    },
    List {
        ordered: bool,
        items: Vec<ListItemBlock>,
    },
    Blockquote {
        blocks: Vec<LayoutBlock>,
    },
    CodeBlock {
        literal: String,
    },
}

impl LayoutBlock {
    /// Plain text of the block, used by the terminal preview.
    pub fn plain_text(&self) -> String {
        match self {
            LayoutBlock::Paragraph { runs } | LayoutBlock::Heading { runs, .. } => {
                runs.iter().map(|r| r.text.as_str()).collect()
            }
            LayoutBlock::List { items, .. } => items
                .iter()
                .map(|it| {
                    let body: String = it.runs.iter().map(|r| r.text.as_str()).collect();
                    format!("{} {}", it.bullet, body)
                })
                .collect::<Vec<_>>()
                .join("\n"),
            LayoutBlock::Blockquote { blocks } => blocks
                .iter()
                .map(LayoutBlock::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
            LayoutBlock::CodeBlock { literal } => literal.clone(),
        }
    }
}
