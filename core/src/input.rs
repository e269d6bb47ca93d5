//! Test case documents and their conversion into point stores.
//!
//! A test case is a JSON object with a `keys` section holding `n` and `k`,
//! and one entry per share keyed by its `x`:
//!
//! ```json
//! { "keys": { "n": 2, "k": 2 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" } }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{InputError, RecoveryError, Result};
use crate::points::{Point, PointStore};

const KEYS: &str = "keys";

/// The `keys` section: declared share count and threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// One share as written in the document, before decoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EncodedShare {
    pub base: String,
    pub value: String,
}

impl EncodedShare {
    pub fn new(base: u32, value: impl Into<String>) -> Self {
        Self {
            base: base.to_string(),
            value: value.into(),
        }
    }
}

/// A parsed, not yet decoded, test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub keys: Keys,
    /// Shares keyed by the raw `x` string from the document.
    pub shares: BTreeMap<String, EncodedShare>,
}

impl TestCase {
    pub fn from_json(text: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(text)?;
        Self::from_value(document)
    }

    pub fn from_value(document: Value) -> Result<Self> {
        let Value::Object(mut object) = document else {
            return Err(InputError::NotAnObject.into());
        };

        let keys = object.remove(KEYS).ok_or(InputError::MissingKeys)?;
        let keys: Keys = serde_json::from_value(keys)
            .map_err(|e| InputError::InvalidKeys(e.to_string()))?;

        let shares = object
            .into_iter()
            .map(|(key, share)| {
                let share = encoded_share(&key, share)?;
                Ok((key, share))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self { keys, shares })
    }

    /// Read and parse a test case file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RecoveryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "test case read");
        Self::from_json(&text)
    }

    /// Decode every share and collect them into a fresh store.
    pub fn to_store(&self) -> Result<PointStore> {
        let mut builder = PointStore::builder(self.keys.n, self.keys.k);
        for (key, share) in &self.shares {
            builder.insert(decode_share(key, share)?)?;
        }
        builder.build()
    }

    /// The document form of this test case.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert(KEYS.to_string(), serde_json::json!(self.keys));
        for (key, share) in &self.shares {
            object.insert(key.clone(), serde_json::json!(share));
        }
        Value::Object(object)
    }
}

impl TryFrom<&TestCase> for PointStore {
    type Error = RecoveryError;

    fn try_from(case: &TestCase) -> Result<Self> {
        case.to_store()
    }
}

fn encoded_share(key: &str, share: Value) -> Result<EncodedShare> {
    let Value::Object(fields) = share else {
        return Err(InputError::InvalidShare {
            key: key.to_string(),
        }
        .into());
    };

    let field = |name: &'static str| -> Result<String> {
        match fields.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            _ => Err(InputError::MissingField {
                key: key.to_string(),
                field: name,
            }
            .into()),
        }
    };

    Ok(EncodedShare {
        base: field("base")?,
        value: field("value")?,
    })
}

/// Parse the abscissa from `key` and decode `share` into a point.
pub fn decode_share(key: &str, share: &EncodedShare) -> Result<Point> {
    let x: u64 = key
        .trim()
        .parse()
        .ok()
        .filter(|&x| x > 0)
        .ok_or_else(|| InputError::InvalidKey(key.to_string()))?;
    let base: u32 = share.base.trim().parse().map_err(|_| {
        InputError::InvalidBase {
            key: key.to_string(),
            base: share.base.clone(),
        }
    })?;
    let y = math::radix::decode_big(&share.value, base)
        .map_err(|source| RecoveryError::Decode { x, source })?;

    Ok(Point::new(x, y))
}
