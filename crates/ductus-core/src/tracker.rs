//! Occurrence tracker: frequency statistics of nodes and pairs across kern passes.
//!
//! Two observations are "the same" when they share the context, the text (glyph or pair text)
//! and the exact kerning value. Records keep first-seen order.

use crate::kerning::{NodePair, PairWeight};
use crate::sequence::{ContextId, Node, Sequence};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct OccurrenceKey {
    context: ContextId,
    text: String,
    kerning_bits: u64,
}

impl OccurrenceKey {
    fn new(context: ContextId, text: String, kerning: f64) -> Self {
        Self {
            context,
            text,
            // `+ 0.0` folds -0.0 into 0.0 so both hash alike.
            kerning_bits: (kerning + 0.0).to_bits(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeOccurrence {
    pub context: ContextId,
    pub text: String,
    pub kerning: f64,
    pub count: usize,
    pub positions: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairOccurrence {
    pub context: ContextId,
    pub text: String,
    pub weight: PairWeight,
    pub kerning: f64,
    pub letter_space: String,
    pub count: usize,
    pub position_ranges: Vec<[usize; 2]>,
}

/// Serializable copy of the tracker's state, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerSnapshot {
    pub nodes: Vec<NodeOccurrence>,
    pub pairs: Vec<PairOccurrence>,
}

#[derive(Debug, Clone, Default)]
pub struct OccurrenceTracker {
    nodes: IndexMap<OccurrenceKey, NodeOccurrence>,
    pairs: IndexMap<OccurrenceKey, PairOccurrence>,
}

impl OccurrenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `node` and returns its occurrence count. Tags are not tracked and return 0.
    pub fn track_node(&mut self, node: &Node) -> usize {
        let Some(glyph) = node.glyph() else {
            return 0;
        };
        let text = glyph.glyph.to_string();
        let key = OccurrenceKey::new(node.context, text.clone(), node.kerning);
        let record = self.nodes.entry(key).or_insert_with(|| NodeOccurrence {
            context: node.context,
            text,
            kerning: node.kerning,
            count: 0,
            positions: Vec::new(),
        });
        record.count += 1;
        record.positions.push(node.position);
        record.count
    }

    /// Records `pair` and returns its occurrence count.
    pub fn track_pair(&mut self, pair: &NodePair) -> usize {
        let key = OccurrenceKey::new(pair.context, pair.text.clone(), pair.kerning);
        let record = self.pairs.entry(key).or_insert_with(|| PairOccurrence {
            context: pair.context,
            text: pair.text.clone(),
            weight: pair.weight,
            kerning: pair.kerning,
            letter_space: pair.letter_space.clone(),
            count: 0,
            position_ranges: Vec::new(),
        });
        record.count += 1;
        record.position_ranges.push(pair.positions);
        record.count
    }

    pub fn track_sequence(&mut self, sequence: &Sequence) {
        for node in &sequence.nodes {
            self.track_node(node);
        }
        for pair in &sequence.pairs {
            self.track_pair(pair);
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeOccurrence> {
        self.nodes.values()
    }

    pub fn pairs(&self) -> impl Iterator<Item = &PairOccurrence> {
        self.pairs.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Pairs ordered by descending count; ties keep first-seen order.
    pub fn most_frequent_pairs(&self, limit: usize) -> Vec<&PairOccurrence> {
        let mut out: Vec<&PairOccurrence> = self.pairs.values().collect();
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out.truncate(limit);
        out
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            nodes: self.nodes.values().cloned().collect(),
            pairs: self.pairs.values().cloned().collect(),
        }
    }

    pub fn reset(&mut self) {
        self.nodes.clear();
        self.pairs.clear();
    }
}
