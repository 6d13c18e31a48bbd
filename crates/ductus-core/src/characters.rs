//! Character catalog: before/after strokes for every supported glyph.
//!
//! A glyph can be reached three ways: the literal character, a named entity (`&amp;`) or a
//! numeric entity (`&#38;`). Several rows may share one glyph (the literal row for `&` and the
//! row carrying its escapes); literal lookups return the first registered row.

use crate::generated::catalog;
use crate::strokes::{Stroke, StrokeCatalog};
use crate::{Error, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSpec {
    pub glyph: char,
    pub before: char,
    pub after: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_entity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterEntry {
    pub glyph: char,
    pub before: Stroke,
    pub after: Stroke,
    pub entity_name: Option<String>,
    pub numeric_entity: Option<String>,
}

/// The weight-relevant part of a [`CharacterEntry`], cheap enough to copy into every node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Glyph {
    pub glyph: char,
    pub before: Stroke,
    pub after: Stroke,
}

impl CharacterEntry {
    /// The authoring row this entry was built from.
    pub fn to_spec(&self) -> CharacterSpec {
        CharacterSpec {
            glyph: self.glyph,
            before: self.before.code,
            after: self.after.code,
            entity_name: self.entity_name.clone(),
            numeric_entity: self.numeric_entity.clone(),
        }
    }

    pub fn to_glyph(&self) -> Glyph {
        Glyph {
            glyph: self.glyph,
            before: self.before,
            after: self.after,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CharacterCatalog {
    entries: Vec<CharacterEntry>,
    by_char: FxHashMap<char, usize>,
    by_entity_name: FxHashMap<String, usize>,
    by_numeric_entity: FxHashMap<String, usize>,
}

impl CharacterCatalog {
    /// Resolves every row's stroke codes against `strokes`.
    ///
    /// Fails with [`Error::UnknownStrokeCode`] on the first code the stroke catalog does not
    /// know; that is an authoring defect in the catalog, not something input text can trigger.
    pub fn build(specs: &[CharacterSpec], strokes: &StrokeCatalog) -> Result<Self> {
        let mut entries = Vec::with_capacity(specs.len());
        let mut by_char = FxHashMap::default();
        let mut by_entity_name = FxHashMap::default();
        let mut by_numeric_entity = FxHashMap::default();

        for spec in specs {
            let resolve = |code: char| {
                strokes.get(code).ok_or(Error::UnknownStrokeCode {
                    glyph: spec.glyph,
                    code,
                })
            };
            let entry = CharacterEntry {
                glyph: spec.glyph,
                before: resolve(spec.before)?,
                after: resolve(spec.after)?,
                entity_name: spec.entity_name.clone(),
                numeric_entity: spec.numeric_entity.clone(),
            };

            let idx = entries.len();
            by_char.entry(entry.glyph).or_insert(idx);
            if let Some(name) = &entry.entity_name {
                by_entity_name.entry(name.clone()).or_insert(idx);
            }
            if let Some(num) = &entry.numeric_entity {
                by_numeric_entity.entry(num.clone()).or_insert(idx);
            }
            entries.push(entry);
        }

        Ok(Self {
            entries,
            by_char,
            by_entity_name,
            by_numeric_entity,
        })
    }

    pub fn builtin(strokes: &StrokeCatalog) -> Result<Self> {
        Self::build(&builtin_specs(), strokes)
    }

    pub fn find_by_char(&self, glyph: char) -> Option<&CharacterEntry> {
        self.by_char.get(&glyph).map(|&idx| &self.entries[idx])
    }

    pub fn find_by_entity_name(&self, name: &str) -> Option<&CharacterEntry> {
        self.by_entity_name.get(name).map(|&idx| &self.entries[idx])
    }

    pub fn find_by_numeric_entity(&self, numeric: &str) -> Option<&CharacterEntry> {
        self.by_numeric_entity
            .get(numeric)
            .map(|&idx| &self.entries[idx])
    }

    /// Resolves an entity token (`&amp;`, `&#38;`, `&#x26;`).
    ///
    /// Registered spellings win; otherwise the token is decoded with the HTML entity table and
    /// the resulting single character is looked up literally.
    pub fn resolve_entity(&self, token: &str) -> Option<&CharacterEntry> {
        if let Some(entry) = self
            .find_by_entity_name(token)
            .or_else(|| self.find_by_numeric_entity(token))
        {
            return Some(entry);
        }

        let decoded = htmlize::unescape(token);
        if decoded.as_ref() == token {
            return None;
        }
        let mut chars = decoded.chars();
        match (chars.next(), chars.next()) {
            (Some(glyph), None) => self.find_by_char(glyph),
            _ => None,
        }
    }

    pub fn entries(&self) -> &[CharacterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn builtin_specs() -> Vec<CharacterSpec> {
    catalog::CHARACTERS
        .iter()
        .map(
            |&(glyph, before, after, entity_name, numeric_entity)| CharacterSpec {
                glyph,
                before,
                after,
                entity_name: entity_name.map(str::to_string),
                numeric_entity: numeric_entity.map(str::to_string),
            },
        )
        .collect()
}
