//! Embedded-document combinator and serialization configuration
//!
//! A document contract wraps an inner contract together with a pluggable
//! text [`Codec`], producing a contract whose literal representation is
//! serialized text instead of a structured literal. From the perspective
//! of any surrounding combinator a document is just another leaf whose
//! literal kind happens to be string.
//!
//! The process-wide default codec is pretty-printed JSON out, strict JSON
//! in. It can be replaced as a whole-value swap; document contracts built
//! without an explicit override capture the default at construction time,
//! so a later swap never retroactively affects an existing contract.
//!
//! Copyright (c) 2025 Recast Team
//! Licensed under the Apache-2.0 license

use crate::contract::Contract;
use crate::error::{kind_of, Error};
use crate::path::Breadcrumbs;
use crate::Result;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// A conforming encode/decode pair over the literal value model.
///
/// The closures report failures through `anyhow` so arbitrary codecs can
/// surface their own error types; the engine attaches the breadcrumb
/// trail when converting into [`Error::Serialization`].
#[derive(Clone)]
pub struct Codec {
    name: &'static str,
    serialize: Arc<dyn Fn(&Value) -> anyhow::Result<String> + Send + Sync>,
    deserialize: Arc<dyn Fn(&str) -> anyhow::Result<Value> + Send + Sync>,
}

impl Codec {
    /// Build a codec from an arbitrary encode/decode pair.
    pub fn new<S, D>(name: &'static str, serialize: S, deserialize: D) -> Self
    where
        S: Fn(&Value) -> anyhow::Result<String> + Send + Sync + 'static,
        D: Fn(&str) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self {
            name,
            serialize: Arc::new(serialize),
            deserialize: Arc::new(deserialize),
        }
    }

    /// Pretty-printed JSON out, strict JSON in. The initial process-wide
    /// default.
    pub fn pretty_json() -> Self {
        Self::new(
            "json-pretty",
            |literal| Ok(serde_json::to_string_pretty(literal)?),
            |text| Ok(serde_json::from_str(text)?),
        )
    }

    /// Compact JSON variant preset.
    pub fn compact_json() -> Self {
        Self::new(
            "json-compact",
            |literal| Ok(serde_json::to_string(literal)?),
            |text| Ok(serde_json::from_str(text)?),
        )
    }

    /// The codec's configured name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn encode(&self, literal: &Value, crumbs: &Breadcrumbs) -> Result<String> {
        (self.serialize)(literal).map_err(|err| Error::Serialization {
            message: err.to_string(),
            trail: crumbs.render(),
        })
    }

    pub(crate) fn decode(&self, text: &str, crumbs: &Breadcrumbs) -> Result<Value> {
        (self.deserialize)(text).map_err(|err| Error::Serialization {
            message: err.to_string(),
            trail: crumbs.render(),
        })
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec").field("name", &self.name).finish()
    }
}

static DEFAULT_CODEC: LazyLock<RwLock<Codec>> =
    LazyLock::new(|| RwLock::new(Codec::pretty_json()));

/// Clone of the current process-wide default codec.
pub fn default_codec() -> Codec {
    DEFAULT_CODEC
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide default codec. Infrequent whole-value swap;
/// document contracts already built keep the codec they captured.
pub fn set_default_codec(codec: Codec) {
    log::debug!("replacing process default codec with '{}'", codec.name);
    *DEFAULT_CODEC.write().unwrap_or_else(PoisonError::into_inner) = codec;
}

/// Embedded-document contract using the process default codec, captured
/// now, at construction time.
pub fn document(inner: Contract) -> Contract {
    document_with(inner, default_codec())
}

/// Embedded-document contract with an explicit codec override.
///
/// Transform runs the inner contract first and serializes the resulting
/// literal into a string; restore deserializes the string and runs the
/// inner contract on the decoded literal.
pub fn document_with(inner: Contract, codec: Codec) -> Contract {
    let transform_inner = inner.clone();
    let restore_inner = inner;
    let transform_codec = codec.clone();
    let restore_codec = codec;
    Contract::new(
        move |value, crumbs| {
            let crumbs = crumbs.with("document:transform");
            let literal = transform_inner.transform_in(value, &crumbs)?;
            let text = transform_codec.encode(&literal, &crumbs)?;
            Ok(Value::String(text))
        },
        move |literal, crumbs| {
            let crumbs = crumbs.with("document:restore");
            let text = literal.as_str().ok_or_else(|| Error::Validation {
                message: format!("expected string, received {}", kind_of(literal)),
                value: literal.clone(),
                trail: crumbs.render(),
            })?;
            let decoded = restore_codec.decode(text, &crumbs)?;
            restore_inner.restore_in(&decoded, &crumbs)
        },
    )
}
