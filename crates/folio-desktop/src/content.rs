//! Content blocks for the About and Blog windows
//!
//! A document is an ordered list of blocks. Rendering and typography belong
//! to the host; this is only the data model it receives.

use serde::{Deserialize, Serialize};

/// One block of page content
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Quote {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attribution: Option<String>,
    },
    List {
        #[serde(default)]
        ordered: bool,
        items: Vec<String>,
    },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Plain text of the block, list items joined by newlines
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } | Block::Paragraph { text } | Block::Quote { text, .. } => text.clone(),
            Block::List { items, .. } => items.join("\n"),
        }
    }
}

/// Ordered sequence of blocks
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Text of the first heading, if any
    pub fn first_heading(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Rough reading time at 200 words per minute, at least one minute
    pub fn reading_minutes(&self) -> usize {
        let words: usize = self
            .blocks
            .iter()
            .map(|b| b.plain_text().split_whitespace().count())
            .sum();
        words.div_ceil(200).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_json_shape() {
        let json = r#"[
            {"type":"heading","level":2,"text":"Hello"},
            {"type":"paragraph","text":"Body"},
            {"type":"quote","text":"Stay curious"},
            {"type":"list","items":["one","two"]}
        ]"#;
        let blocks: Vec<Block> = serde_json::from_str(json).unwrap();
        assert_eq!(blocks[0], Block::heading(2, "Hello"));
        assert_eq!(
            blocks[2],
            Block::Quote { text: "Stay curious".into(), attribution: None }
        );
        assert_eq!(
            blocks[3],
            Block::List { ordered: false, items: vec!["one".into(), "two".into()] }
        );

        let out = serde_json::to_string(&blocks[2]).unwrap();
        assert!(!out.contains("attribution"));
    }

    #[test]
    fn test_document_helpers() {
        let doc = Document::new("About")
            .push(Block::paragraph("intro"))
            .push(Block::heading(9, "Work"));
        assert_eq!(doc.first_heading(), Some("Work"));
        assert_eq!(doc.blocks[1], Block::Heading { level: 6, text: "Work".into() });
        assert_eq!(doc.reading_minutes(), 1);
    }
}
