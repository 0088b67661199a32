//! Modifier combinators: optional/nullable wrappers, object-shape
//! extension, and deferred contract references
//!
//! Modifiers follow a single pattern: wrap an inner contract and rewrite
//! the accepted/produced value set at the boundary, leaving everything
//! else to the inner contract.
//!
//! Copyright (c) 2025 Recast Team
//! Licensed under the Apache-2.0 license

use crate::containers::object_from_shape;
use crate::contract::Contract;
use crate::error::Error;
use crate::Result;
use serde_json::Value;
use std::sync::Arc;

fn null_passthrough(inner: Contract) -> Contract {
    let transform_inner = inner.clone();
    let restore_inner = inner;
    Contract::new(
        move |value, crumbs| {
            if value.is_null() {
                Ok(Value::Null)
            } else {
                transform_inner.transform_in(value, crumbs)
            }
        },
        move |literal, crumbs| {
            if literal.is_null() {
                Ok(Value::Null)
            } else {
                restore_inner.restore_in(literal, crumbs)
            }
        },
    )
}

/// Mark a contract as optional.
///
/// Inside an [`object`](crate::containers::object) shape the key may be
/// absent and is then omitted from the output; the `optional` attribute
/// carries that permission to the object combinator's required-key check.
/// Standalone, null passes straight through without invoking the inner
/// contract (serde_json has no distinct absent marker, so null stands in
/// for absence at the top level).
pub fn optional(inner: Contract) -> Contract {
    null_passthrough(inner).with_attribute("optional", Value::Bool(true))
}

/// Accept null in place of the inner contract's values.
///
/// Unlike [`optional`], the key of a nullable object entry stays
/// required - it must be present, but may be null.
pub fn nullable(inner: Contract) -> Contract {
    null_passthrough(inner)
}

/// Merge two fixed-shape object contracts into one whose declared key set
/// is the union of both.
///
/// On a key collision the extension's contract wins and keeps the base's
/// declared position; keys new to the extension are appended in extension
/// order.
///
/// # Errors
///
/// Returns [`Error::Composition`] when either argument was not built by
/// [`object`](crate::containers::object).
pub fn extend_object(base: &Contract, extension: &Contract) -> Result<Contract> {
    let base_shape = base.shape().ok_or_else(|| Error::Composition {
        message: "extend_object: base is not an object contract".to_string(),
    })?;
    let extension_shape = extension.shape().ok_or_else(|| Error::Composition {
        message: "extend_object: extension is not an object contract".to_string(),
    })?;

    let mut merged: Vec<(String, Contract)> = base_shape.as_ref().clone();
    for (key, child) in extension_shape.iter() {
        if let Some(slot) = merged.iter_mut().find(|(existing, _)| existing == key) {
            slot.1 = child.clone();
        } else {
            merged.push((key.clone(), child.clone()));
        }
    }
    Ok(object_from_shape(Arc::new(merged)))
}

/// Deferred contract reference: `resolve` is invoked on every transform
/// and restore, so schema definitions may refer to themselves or to each
/// other. Recursion depth stays bounded by the depth of the data, as
/// everywhere else in the engine.
pub fn lazy<F>(resolve: F) -> Contract
where
    F: Fn() -> Contract + Send + Sync + 'static,
{
    let resolve = Arc::new(resolve);
    let restore_resolve = Arc::clone(&resolve);
    Contract::new(
        move |value, crumbs| resolve().transform_in(value, crumbs),
        move |literal, crumbs| restore_resolve().restore_in(literal, crumbs),
    )
}
