//! Sequence builder: turns a text-with-markup string into an ordered list of nodes.

use crate::catalog::Catalog;
use crate::characters::{CharacterCatalog, Glyph};
use crate::kerning::{FontSizeProvider, LetterSpaceFormat, NodePair, compute_pairs};
use crate::scanner::{Token, TokenKind, scan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to the rendering scope (typically one host element) a sequence belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContextId(pub u32);

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    /// A plain character found in the catalog.
    Literal { glyph: Glyph },
    /// An entity token resolved to a catalogued glyph; `source` keeps the raw spelling.
    Entity { glyph: Glyph, source: String },
    /// An opaque tag, kept verbatim.
    Tag { text: String, closing: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub context: ContextId,
    /// 1-based label; a token takes a single slot no matter how many characters it spans.
    pub position: usize,
    pub kind: NodeKind,
    /// Spacing towards the next kernable node; set once by [`Sequence::build`].
    pub kerning: f64,
}

impl Node {
    pub fn glyph(&self) -> Option<&Glyph> {
        match &self.kind {
            NodeKind::Literal { glyph } | NodeKind::Entity { glyph, .. } => Some(glyph),
            NodeKind::Tag { .. } => None,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self.kind, NodeKind::Tag { .. })
    }

    pub fn is_closing_tag(&self) -> bool {
        matches!(self.kind, NodeKind::Tag { closing: true, .. })
    }

    /// The resolved glyph for characters and entities, the raw token for tags.
    pub fn text(&self) -> String {
        match &self.kind {
            NodeKind::Literal { glyph } | NodeKind::Entity { glyph, .. } => glyph.glyph.to_string(),
            NodeKind::Tag { text, .. } => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Plain,
    InsideToken(usize),
}

/// Walks `input` one character at a time and emits a node per renderable unit.
///
/// The position counter advances once per character index; when a token is emitted at its
/// final character the counter is moved back by `len - 1`, so labels count units rather than
/// characters. Characters and entities the catalog does not know are skipped but still use up
/// their label slot.
pub fn build_nodes(
    context: ContextId,
    input: &str,
    tokens: &[Token<'_>],
    characters: &CharacterCatalog,
) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut position = 0usize;
    let mut next_token = 0usize;
    let mut state = ScanState::Plain;

    for (i, ch) in input.chars().enumerate() {
        position += 1;

        if state == ScanState::Plain {
            if let Some(token) = tokens.get(next_token) {
                if token.start == i {
                    state = ScanState::InsideToken(next_token);
                    next_token += 1;
                }
            }
        }

        match state {
            ScanState::Plain => match characters.find_by_char(ch) {
                Some(entry) => nodes.push(Node {
                    context,
                    position,
                    kind: NodeKind::Literal {
                        glyph: entry.to_glyph(),
                    },
                    kerning: 0.0,
                }),
                None => {
                    tracing::trace!(%context, index = i, ch = %ch.escape_debug(), "unresolved character dropped");
                }
            },
            ScanState::InsideToken(idx) => {
                let token = &tokens[idx];
                if i != token.last_index() {
                    continue;
                }
                state = ScanState::Plain;
                position -= token.len() - 1;

                let kind = match token.kind {
                    TokenKind::Tag => Some(NodeKind::Tag {
                        text: token.text.to_string(),
                        closing: token.text.starts_with("</"),
                    }),
                    TokenKind::Entity => match characters.resolve_entity(token.text) {
                        Some(entry) => Some(NodeKind::Entity {
                            glyph: entry.to_glyph(),
                            source: token.text.to_string(),
                        }),
                        None => {
                            tracing::trace!(%context, entity = token.text, "unresolved entity dropped");
                            None
                        }
                    },
                };
                if let Some(kind) = kind {
                    nodes.push(Node {
                        context,
                        position,
                        kind,
                        kerning: 0.0,
                    });
                }
            }
        }
    }

    nodes
}

/// Everything computed for one context in one kern pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequence {
    pub context: ContextId,
    pub original: String,
    pub font_size: f64,
    pub nodes: Vec<Node>,
    pub pairs: Vec<NodePair>,
}

impl Sequence {
    /// Runs scan → build → pair for `input` and writes each pair's kerning onto its left node.
    pub fn build(
        context: ContextId,
        input: &str,
        catalog: &Catalog,
        fonts: &dyn FontSizeProvider,
        format: &LetterSpaceFormat,
    ) -> Self {
        let tokens = scan(input);
        let mut nodes = build_nodes(context, input, &tokens, catalog.characters());
        let font_size = match fonts.font_size(context) {
            size if size.is_finite() && size >= 0.0 => size,
            size => {
                tracing::warn!(%context, font_size = size, "unusable font size, kerning disabled");
                0.0
            }
        };
        let pairs = compute_pairs(context, &nodes, font_size, format);
        for pair in &pairs {
            nodes[pair.left].kerning = pair.kerning;
        }

        Self {
            context,
            original: input.to_string(),
            font_size,
            nodes,
            pairs,
        }
    }

    /// Identity serialization: glyphs for characters and entities, raw text for tags.
    pub fn plain_text(&self) -> String {
        let mut out = String::with_capacity(self.original.len());
        for node in &self.nodes {
            match &node.kind {
                NodeKind::Literal { glyph } | NodeKind::Entity { glyph, .. } => {
                    out.push(glyph.glyph)
                }
                NodeKind::Tag { text, .. } => out.push_str(text),
            }
        }
        out
    }

    pub fn kernable_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| !n.is_tag())
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
