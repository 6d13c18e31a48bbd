//! Stroke catalog and the precomputed stroke-pair table.
//!
//! A stroke describes the pen shape at one edge of a glyph (vertical stem, round bowl, slant...).
//! Its weight approximates how much white space that edge leaves next to a neighbour, so the
//! sum of two facing edges drives the letter-spacing between two characters.

use crate::generated::catalog;
use crate::{Error, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Resolved stroke: the code plus the weight used in pair sums.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub code: char,
    pub weight: f64,
}

/// Catalog row as authored (built-in table or JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeSpec {
    pub code: char,
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct StrokeCatalog {
    specs: Vec<StrokeSpec>,
    by_code: FxHashMap<char, usize>,
}

impl StrokeCatalog {
    pub fn new(specs: Vec<StrokeSpec>) -> Result<Self> {
        if specs.is_empty() {
            return Err(Error::InvalidCatalog {
                message: "stroke catalog is empty".to_string(),
            });
        }

        let mut by_code = FxHashMap::default();
        for (idx, spec) in specs.iter().enumerate() {
            if !(spec.weight.is_finite() && spec.weight >= 0.0) {
                return Err(Error::InvalidCatalog {
                    message: format!(
                        "stroke {:?} ({}) has invalid weight {}",
                        spec.code, spec.name, spec.weight
                    ),
                });
            }
            if by_code.insert(spec.code, idx).is_some() {
                return Err(Error::InvalidCatalog {
                    message: format!("duplicate stroke code {:?}", spec.code),
                });
            }
        }

        Ok(Self { specs, by_code })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(builtin_stroke_specs())
    }

    pub fn get(&self, code: char) -> Option<Stroke> {
        let spec = &self.specs[*self.by_code.get(&code)?];
        Some(Stroke {
            code: spec.code,
            weight: spec.weight,
        })
    }

    pub fn name_of(&self, code: char) -> Option<&str> {
        self.by_code
            .get(&code)
            .map(|&idx| self.specs[idx].name.as_str())
    }

    pub fn specs(&self) -> &[StrokeSpec] {
        &self.specs
    }

    /// Strokes in catalog order.
    pub fn strokes(&self) -> Vec<Stroke> {
        self.specs
            .iter()
            .map(|s| Stroke {
                code: s.code,
                weight: s.weight,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

pub fn builtin_stroke_specs() -> Vec<StrokeSpec> {
    catalog::STROKES
        .iter()
        .map(|&(code, name, weight)| StrokeSpec {
            code,
            name: name.to_string(),
            weight,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokePair {
    pub key: String,
    pub left: char,
    pub right: char,
    pub weight: f64,
}

/// Builds one entry per ordered pair of `strokes`, in row-major order.
pub fn build_stroke_pairs(strokes: &[Stroke]) -> Vec<StrokePair> {
    let mut out = Vec::with_capacity(strokes.len() * strokes.len());
    for x in strokes {
        for y in strokes {
            let mut key = String::with_capacity(2);
            key.push(x.code);
            key.push(y.code);
            out.push(StrokePair {
                key,
                left: x.code,
                right: y.code,
                weight: (x.weight + y.weight).round(),
            });
        }
    }
    out
}

#[derive(Debug, Clone)]
pub struct StrokePairTable {
    pairs: Vec<StrokePair>,
    index: FxHashMap<(char, char), usize>,
}

impl StrokePairTable {
    pub fn new(strokes: &StrokeCatalog) -> Self {
        let pairs = build_stroke_pairs(&strokes.strokes());
        let index = pairs
            .iter()
            .enumerate()
            .map(|(idx, p)| ((p.left, p.right), idx))
            .collect();
        Self { pairs, index }
    }

    pub fn get(&self, left: char, right: char) -> Option<&StrokePair> {
        self.index.get(&(left, right)).map(|&idx| &self.pairs[idx])
    }

    pub fn pairs(&self) -> &[StrokePair] {
        &self.pairs
    }
}
