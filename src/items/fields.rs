use std::fmt;

use serde_json::{Map, Number, Value};

use super::ItemError;
use crate::helpers::truncate_scaled;

/// Typed view over one JSON object inside an item definition.
///
/// Reads follow one rule: an absent field is `None`, a field holding the
/// wrong kind of value is a `TypeMismatch`. Nothing is coerced.
#[derive(Debug)]
pub struct Fields<'a> {
    item: &'a str,
    scope: String,
    map: &'a mut Map<String, Value>,
}

/// Old and new value of a field that was rescaled in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Rescaled {
    pub old: Number,
    pub new: Number,
}

impl fmt::Display for Rescaled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.old, self.new)
    }
}

impl<'a> Fields<'a> {
    /// View the top-level definition of item `id`.
    pub fn record(id: &'a str, definition: &'a mut Value) -> Result<Self, ItemError> {
        match definition {
            Value::Object(map) => Ok(Self {
                item: id,
                scope: String::new(),
                map,
            }),
            other => Err(ItemError::TypeMismatch {
                item: id.to_string(),
                field: "<item>".to_string(),
                expected: "object",
                found: kind(other),
            }),
        }
    }

    /// Numeric value of `key`.
    pub fn number(&self, key: &str) -> Result<Option<Number>, ItemError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(Some(n.clone())),
            Some(other) => Err(self.mismatch(key, "number", other)),
        }
    }

    /// Nested object under `key`.
    pub fn object(&mut self, key: &str) -> Result<Option<Fields<'_>>, ItemError> {
        let item = self.item;
        let scope = self.qualify(key);
        match self.map.get_mut(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(Fields { item, scope, map })),
            Some(other) => Err(ItemError::TypeMismatch {
                item: item.to_string(),
                field: scope,
                expected: "object",
                found: kind(other),
            }),
        }
    }

    /// Every value of this object viewed as an object itself, e.g. the
    /// per-language entries of `locales`.
    pub fn entries(&mut self) -> impl Iterator<Item = Result<Fields<'_>, ItemError>> {
        let item = self.item;
        let parent = self.scope.clone();
        self.map.iter_mut().map(move |(key, value)| {
            let scope = join(&parent, key);
            match value {
                Value::Object(map) => Ok(Fields { item, scope, map }),
                other => Err(ItemError::TypeMismatch {
                    item: item.to_string(),
                    field: scope,
                    expected: "object",
                    found: kind(other),
                }),
            }
        })
    }

    /// Replace `key` with `value`, adding it at the end when absent.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.map.insert(key.to_string(), value.into());
    }

    /// Multiply `key` by `factor` and store the truncated integer.
    pub fn scale_truncated(
        &mut self,
        key: &str,
        factor: f64,
    ) -> Result<Option<Rescaled>, ItemError> {
        let Some(old) = self.number(key)? else {
            return Ok(None);
        };
        let new = truncate_scaled(self.as_f64(key, &old)?, factor).ok_or_else(|| {
            ItemError::NotRepresentable {
                item: self.item.to_string(),
                field: self.qualify(key),
            }
        })?;
        self.set(key, new.clone());
        Ok(Some(Rescaled { old, new }))
    }

    /// Multiply `key` by `factor`, keeping the result as a float.
    pub fn scale_float(&mut self, key: &str, factor: f64) -> Result<Option<Rescaled>, ItemError> {
        let Some(old) = self.number(key)? else {
            return Ok(None);
        };
        let new = Number::from_f64(self.as_f64(key, &old)? * factor).ok_or_else(|| {
            ItemError::NotRepresentable {
                item: self.item.to_string(),
                field: self.qualify(key),
            }
        })?;
        self.set(key, new.clone());
        Ok(Some(Rescaled { old, new }))
    }

    /// Pass the string under `key` through `rewrite`. Returns whether the
    /// field was present.
    pub fn rewrite_text(
        &mut self,
        key: &str,
        rewrite: impl FnOnce(&str) -> String,
    ) -> Result<bool, ItemError> {
        let updated = match self.map.get(key) {
            None => return Ok(false),
            Some(Value::String(text)) => rewrite(text.as_str()),
            Some(other) => return Err(self.mismatch(key, "string", other)),
        };
        self.set(key, updated);
        Ok(true)
    }

    fn as_f64(&self, key: &str, number: &Number) -> Result<f64, ItemError> {
        number.as_f64().ok_or_else(|| ItemError::NotRepresentable {
            item: self.item.to_string(),
            field: self.qualify(key),
        })
    }

    fn qualify(&self, key: &str) -> String {
        join(&self.scope, key)
    }

    fn mismatch(&self, key: &str, expected: &'static str, found: &Value) -> ItemError {
        ItemError::TypeMismatch {
            item: self.item.to_string(),
            field: self.qualify(key),
            expected,
            found: kind(found),
        }
    }
}

fn join(scope: &str, key: &str) -> String {
    if scope.is_empty() {
        key.to_string()
    } else {
        format!("{scope}.{key}")
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
