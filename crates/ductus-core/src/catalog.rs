use crate::Result;
use crate::characters::{CharacterCatalog, CharacterEntry, CharacterSpec, builtin_specs};
use crate::strokes::{StrokeCatalog, StrokePairTable, StrokeSpec, builtin_stroke_specs};
use serde::{Deserialize, Serialize};

/// Authoring form of a full catalog, as loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSpec {
    pub strokes: Vec<StrokeSpec>,
    pub characters: Vec<CharacterSpec>,
}

impl CatalogSpec {
    pub fn builtin() -> Self {
        Self {
            strokes: builtin_stroke_specs(),
            characters: builtin_specs(),
        }
    }
}

/// Immutable lookup tables shared by every stage of the pipeline.
#[derive(Debug, Clone)]
pub struct Catalog {
    strokes: StrokeCatalog,
    pairs: StrokePairTable,
    characters: CharacterCatalog,
}

impl Catalog {
    pub fn from_spec(spec: CatalogSpec) -> Result<Self> {
        let strokes = StrokeCatalog::new(spec.strokes)?;
        let characters = CharacterCatalog::build(&spec.characters, &strokes)?;
        let pairs = StrokePairTable::new(&strokes);
        Ok(Self {
            strokes,
            pairs,
            characters,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_spec(serde_json::from_str(text)?)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_spec(CatalogSpec::builtin())
    }

    /// Authoring form of the loaded tables; [`Catalog::from_spec`] on it rebuilds an equal catalog.
    pub fn to_spec(&self) -> CatalogSpec {
        CatalogSpec {
            strokes: self.strokes.specs().to_vec(),
            characters: self
                .characters
                .entries()
                .iter()
                .map(CharacterEntry::to_spec)
                .collect(),
        }
    }

    pub fn strokes(&self) -> &StrokeCatalog {
        &self.strokes
    }

    pub fn stroke_pairs(&self) -> &StrokePairTable {
        &self.pairs
    }

    pub fn characters(&self) -> &CharacterCatalog {
        &self.characters
    }
}
