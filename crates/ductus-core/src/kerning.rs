//! Kerning calculator: pairs adjacent kernable nodes and derives their spacing.

use crate::characters::Glyph;
use crate::config::KernOptions;
use crate::sequence::{ContextId, Node};
use serde::Serialize;

/// Supplies the live font size of a context. Hosts with a layout engine implement this; tests
/// and the CLI use [`FixedFontSize`] or a closure.
pub trait FontSizeProvider {
    fn font_size(&self, context: ContextId) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFontSize(pub f64);

impl FontSizeProvider for FixedFontSize {
    fn font_size(&self, _context: ContextId) -> f64 {
        self.0
    }
}

impl<F> FontSizeProvider for F
where
    F: Fn(ContextId) -> f64,
{
    fn font_size(&self, context: ContextId) -> f64 {
        self(context)
    }
}

/// How kerning values are written as CSS letter-spacing lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSpaceFormat {
    pub unit: String,
    pub precision: usize,
}

impl Default for LetterSpaceFormat {
    fn default() -> Self {
        Self {
            unit: "px".to_string(),
            precision: 3,
        }
    }
}

impl From<&KernOptions> for LetterSpaceFormat {
    fn from(options: &KernOptions) -> Self {
        Self {
            unit: options.unit.clone(),
            precision: options.precision,
        }
    }
}

impl LetterSpaceFormat {
    /// `-0.640px` for `0.64`. The magnitude is always written negative; zero, values that
    /// round to zero at this precision and non-finite values are written as `0{unit}`.
    pub fn format(&self, kerning: f64) -> String {
        if !kerning.is_finite() {
            return format!("0{}", self.unit);
        }
        let magnitude = format!("{:.*}", self.precision, kerning.abs());
        if magnitude.bytes().all(|b| b == b'0' || b == b'.') {
            return format!("0{}", self.unit);
        }
        format!("-{magnitude}{}", self.unit)
    }
}

/// `round(total * 100) / 100 / 100 * font_size`.
pub fn kerning_value(total: f64, font_size: f64) -> f64 {
    (total * 100.0).round() / 100.0 / 100.0 * font_size
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairWeight {
    pub left_after: f64,
    pub right_before: f64,
    pub total: f64,
}

impl PairWeight {
    pub fn between(left: &Glyph, right: &Glyph) -> Self {
        Self {
            left_after: left.after.weight,
            right_before: right.before.weight,
            total: left.after.weight + right.before.weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePair {
    pub context: ContextId,
    /// Index of the left node in the sequence's node list.
    pub left: usize,
    /// Index of the right node in the sequence's node list.
    pub right: usize,
    /// Position labels of the two members.
    pub positions: [usize; 2],
    pub text: String,
    pub left_glyph: Glyph,
    pub right_glyph: Glyph,
    pub weight: PairWeight,
    pub kerning: f64,
    pub letter_space: String,
}

fn make_pair(
    context: ContextId,
    nodes: &[Node],
    left: usize,
    right: usize,
    font_size: f64,
    format: &LetterSpaceFormat,
) -> Option<NodePair> {
    let left_glyph = *nodes[left].glyph()?;
    let right_glyph = *nodes[right].glyph()?;
    let weight = PairWeight::between(&left_glyph, &right_glyph);
    let kerning = kerning_value(weight.total, font_size);

    let mut text = String::with_capacity(8);
    text.push(left_glyph.glyph);
    text.push(right_glyph.glyph);

    Some(NodePair {
        context,
        left,
        right,
        positions: [nodes[left].position, nodes[right].position],
        text,
        left_glyph,
        right_glyph,
        weight,
        kerning,
        letter_space: format.format(kerning),
    })
}

/// One forward pass over adjacent nodes.
///
/// Tags are transparent: a character followed by one or more tags pairs with the first
/// character after them. The `pending` slot holds that character until it is consumed.
pub fn compute_pairs(
    context: ContextId,
    nodes: &[Node],
    font_size: f64,
    format: &LetterSpaceFormat,
) -> Vec<NodePair> {
    let mut pairs = Vec::new();
    let mut pending: Option<usize> = None;

    for i in 0..nodes.len().saturating_sub(1) {
        let (cur, next) = (&nodes[i], &nodes[i + 1]);
        let left = match (cur.is_tag(), next.is_tag()) {
            (false, false) => Some(i),
            (false, true) => {
                pending = Some(i);
                None
            }
            (true, false) => pending.take(),
            (true, true) => None,
        };
        if let Some(left) = left {
            pairs.extend(make_pair(context, nodes, left, i + 1, font_size, format));
        }
    }

    pairs
}
