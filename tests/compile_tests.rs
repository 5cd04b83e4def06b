use taskdiary::core::compile::{compile_markdown, parse_markdown};
use taskdiary::models::markdown::{FontFamily, InlineRun, LayoutBlock, MarkdownNode};

fn all_runs(blocks: &[LayoutBlock]) -> Vec<&InlineRun> {
    let mut out = Vec::new();
    for block in blocks {
        match block {
            LayoutBlock::Paragraph { runs } | LayoutBlock::Heading { runs, .. } => {
                out.extend(runs.iter())
            }
            LayoutBlock::List { items, .. } => {
                for item in items {
                    out.extend(item.runs.iter());
                }
            }
            LayoutBlock::Blockquote { blocks } => out.extend(all_runs(blocks)),
            LayoutBlock::CodeBlock { .. } => {}
        }
    }
    out
}

#[test]
fn test_bold_and_italic_round_trip() {
    let blocks = compile_markdown("**bold** and *italic*", FontFamily::Helvetica);
    let runs = all_runs(&blocks);

    let bold: Vec<_> = runs.iter().filter(|r| r.bold).collect();
    let italic: Vec<_> = runs.iter().filter(|r| r.italic).collect();

    assert_eq!(bold.len(), 1);
    assert_eq!(bold[0].text, "bold");
    assert_eq!(bold[0].face, "Helvetica-Bold");

    assert_eq!(italic.len(), 1);
    assert_eq!(italic[0].text, "italic");
    assert_eq!(italic[0].face, "Helvetica-Oblique");
}

#[test]
fn test_bold_italic_combination_resolves_combined_face() {
    let blocks = compile_markdown("***both***", FontFamily::TimesRoman);
    let runs = all_runs(&blocks);
    let both: Vec<_> = runs.iter().filter(|r| r.bold && r.italic).collect();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].text, "both");
    assert_eq!(both[0].face, "Times-BoldItalic");
}

#[test]
fn test_ordered_list_labels_are_positional() {
    let blocks = compile_markdown("1. a\n2. b", FontFamily::Helvetica);
    let LayoutBlock::List { ordered, items } = &blocks[0] else {
        panic!("expected a list block, got {:?}", blocks[0]);
    };
    assert!(*ordered);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].bullet, "1.");
    assert_eq!(items[1].bullet, "2.");
    assert_eq!(items[0].runs[0].text, "a");
    assert_eq!(items[1].runs[0].text, "b");
}

#[test]
fn test_ordered_list_ignores_source_numbering() {
    let blocks = compile_markdown("7. a\n8. b", FontFamily::Helvetica);
    let LayoutBlock::List { items, .. } = &blocks[0] else {
        panic!("expected a list block");
    };
    assert_eq!(items[0].bullet, "1.");
    assert_eq!(items[1].bullet, "2.");
}

#[test]
fn test_unordered_list_uses_bullet_glyph() {
    let blocks = compile_markdown("- one\n- two", FontFamily::Helvetica);
    let LayoutBlock::List { ordered, items } = &blocks[0] else {
        panic!("expected a list block");
    };
    assert!(!*ordered);
    assert_eq!(items[0].bullet, "•");
    // The bullet is a sibling of the runs, never embedded in the text
    assert_eq!(items[0].runs[0].text, "one");
}

#[test]
fn test_code_always_monospace() {
    let blocks = compile_markdown("**`code` in bold**", FontFamily::Helvetica);
    let runs = all_runs(&blocks);
    let code: Vec<_> = runs.iter().filter(|r| r.code).collect();
    assert_eq!(code.len(), 1);
    assert_eq!(code[0].text, "code");
    assert_eq!(code[0].face, "Courier");
}

#[test]
fn test_code_block_literal() {
    let blocks = compile_markdown("```\nlet x = 1;\n```", FontFamily::Helvetica);
    assert_eq!(
        blocks[0],
        LayoutBlock::CodeBlock {
            literal: "let x = 1;".to_string()
        }
    );
}

#[test]
fn test_heading_depths() {
    let blocks = compile_markdown("# one\n\n### three", FontFamily::Helvetica);
    let depths: Vec<u8> = blocks
        .iter()
        .filter_map(|b| match b {
            LayoutBlock::Heading { depth, .. } => Some(*depth),
            _ => None,
        })
        .collect();
    assert_eq!(depths, vec![1, 3]);
}

#[test]
fn test_blockquote_nests_blocks() {
    let blocks = compile_markdown("> quoted text", FontFamily::Helvetica);
    let LayoutBlock::Blockquote { blocks: inner } = &blocks[0] else {
        panic!("expected a blockquote");
    };
    assert_eq!(inner.len(), 1);
    assert_eq!(inner[0].plain_text(), "quoted text");
}

#[test]
fn test_unsupported_nodes_drop_silently() {
    // Links and images have no counterpart; they vanish without error
    let blocks = compile_markdown(
        "before [link](https://example.com) after",
        FontFamily::Helvetica,
    );
    let text: String = all_runs(&blocks).iter().map(|r| r.text.as_str()).collect();
    assert!(text.contains("before"));
    assert!(text.contains("after"));
    assert!(!text.contains("link"));
}

#[test]
fn test_ast_shape_for_emphasis() {
    let tree = parse_markdown("**bold**");
    let MarkdownNode::Paragraph { children } = &tree[0] else {
        panic!("expected a paragraph");
    };
    assert_eq!(
        children[0],
        MarkdownNode::Strong {
            children: vec![MarkdownNode::Text {
                literal: "bold".to_string()
            }]
        }
    );
}

#[test]
fn test_compile_is_deterministic() {
    let src = "# Day\n\n**bold** and *italic*\n\n1. a\n2. b";
    let a = compile_markdown(src, FontFamily::Courier);
    let b = compile_markdown(src, FontFamily::Courier);
    assert_eq!(a, b);
}

#[test]
fn test_arbitrary_text_never_fails() {
    // Total function: any input yields a tree
    for src in ["", "   ", "<<<>>>", "| a | b |\n|---|---|", "****", "> > >"] {
        let _ = compile_markdown(src, FontFamily::Helvetica);
    }
}
