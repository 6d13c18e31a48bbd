use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::map::Entry;
use serde_json::{Map, Value};

/// Kerning configuration as a JSON object, addressed with dotted paths.
///
/// Hosts usually start from [`crate::generated::default_config`] and merge overrides on top so
/// every key [`KernOptions::from_config`] reads is present.
#[derive(Debug, Clone, PartialEq)]
pub struct KernConfig(Value);

impl Default for KernConfig {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl KernConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(Error::InvalidConfig {
                message: "config root must be a JSON object".to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_value_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get(dotted_path)?.as_str()
    }

    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.get(dotted_path)?.as_bool()
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        self.get(dotted_path)?.as_f64()
    }

    pub fn get_u64(&self, dotted_path: &str) -> Option<u64> {
        self.get(dotted_path)?.as_u64()
    }

    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        insert_path(&mut self.0, dotted_path, value);
    }

    pub fn deep_merge(&mut self, other: &Value) {
        merge_into(&mut self.0, other);
    }
}

/// Writes `value` at `path` below `node`. Scalars met on the way are replaced by objects.
fn insert_path(node: &mut Value, path: &str, value: Value) {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    let Value::Object(map) = node else {
        return;
    };
    match path.split_once('.') {
        Some((head, rest)) => insert_path(map.entry(head).or_insert(Value::Null), rest, value),
        None => {
            map.insert(path.to_string(), value);
        }
    }
}

/// Objects merge key by key; any other incoming value replaces what is there.
fn merge_into(base: &mut Value, incoming: &Value) {
    if let (Value::Object(base_map), Value::Object(in_map)) = (&mut *base, incoming) {
        for (key, value) in in_map {
            match base_map.entry(key.clone()) {
                Entry::Occupied(mut slot) => merge_into(slot.get_mut(), value),
                Entry::Vacant(slot) => {
                    slot.insert(value.clone());
                }
            }
        }
        return;
    }
    *base = incoming.clone();
}

/// Typed view of a [`KernConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KernOptions {
    /// Font size used when the host does not supply one per context.
    pub font_size: f64,
    /// Length unit appended to letter-spacing values (`px`, `em`, ...).
    pub unit: String,
    /// Decimal places kept when formatting letter-spacing values.
    pub precision: usize,
    /// Prefix of the per-position class names emitted by the renderer.
    pub class_prefix: String,
    /// Whether opening tags get a position class when re-emitted.
    pub annotate_tags: bool,
    /// Whether the kerner feeds every sequence into its occurrence tracker.
    pub tracking: bool,
}

impl Default for KernOptions {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            unit: "px".to_string(),
            precision: 3,
            class_prefix: "kern-".to_string(),
            annotate_tags: true,
            tracking: true,
        }
    }
}

impl KernOptions {
    /// Reads options from `config`, falling back to the defaults for missing keys.
    ///
    /// A key that is present with the wrong JSON type is an error, not a fallback.
    pub fn from_config(config: &KernConfig) -> Result<Self> {
        let defaults = Self::default();
        let opts = Self {
            font_size: typed(config, "fontSize", "a number", Value::as_f64)?
                .unwrap_or(defaults.font_size),
            unit: typed(config, "unit", "a string", Value::as_str)?
                .map(str::to_string)
                .unwrap_or(defaults.unit),
            precision: typed(config, "precision", "a non-negative integer", Value::as_u64)?
                .map(|p| p as usize)
                .unwrap_or(defaults.precision),
            class_prefix: typed(config, "classPrefix", "a string", Value::as_str)?
                .map(str::to_string)
                .unwrap_or(defaults.class_prefix),
            annotate_tags: typed(config, "annotateTags", "a boolean", Value::as_bool)?
                .unwrap_or(defaults.annotate_tags),
            tracking: typed(config, "tracking", "a boolean", Value::as_bool)?
                .unwrap_or(defaults.tracking),
        };
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(Error::InvalidConfig {
                message: format!("fontSize must be a positive number, got {}", self.font_size),
            });
        }
        if self.unit.trim().is_empty() {
            return Err(Error::InvalidConfig {
                message: "unit must not be empty".to_string(),
            });
        }
        if self.precision > 10 {
            return Err(Error::InvalidConfig {
                message: format!("precision must be at most 10, got {}", self.precision),
            });
        }
        Ok(())
    }
}

/// `Ok(None)` when `key` is absent, `InvalidConfig` when `read` rejects the value found there.
fn typed<'a, T>(
    config: &'a KernConfig,
    key: &str,
    expected: &str,
    read: impl FnOnce(&'a Value) -> Option<T>,
) -> Result<Option<T>> {
    let Some(value) = config.get(key) else {
        return Ok(None);
    };
    read(value).map(Some).ok_or_else(|| Error::InvalidConfig {
        message: format!("{key} must be {expected}, got {value}"),
    })
}
