//! Container combinators: fixed-shape objects, homogeneous arrays, and
//! open-keyed records
//!
//! Each combinator owns its child contracts (composition, not aliasing)
//! and threads the breadcrumb stack down with a per-descent tag naming the
//! key or index under processing.
//!
//! Copyright (c) 2025 Recast Team
//! Licensed under the Apache-2.0 license

use crate::contract::{Contract, Shape};
use crate::error::{kind_of, Error};
use crate::path::Breadcrumbs;
use crate::Result;
use serde_json::{Map, Value};
use std::sync::Arc;

fn expect_object<'a>(value: &'a Value, crumbs: &Breadcrumbs) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| Error::NotAnObject {
        found: kind_of(value).to_string(),
        value: value.clone(),
        trail: crumbs.render(),
    })
}

fn expect_array<'a>(value: &'a Value, crumbs: &Breadcrumbs) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| Error::NotAnArray {
        found: kind_of(value).to_string(),
        value: value.clone(),
        trail: crumbs.render(),
    })
}

#[derive(Clone, Copy)]
enum Direction {
    Transform,
    Restore,
}

impl Direction {
    fn name(self) -> &'static str {
        match self {
            Direction::Transform => "transform",
            Direction::Restore => "restore",
        }
    }

    fn run(self, contract: &Contract, value: &Value, crumbs: &Breadcrumbs) -> Result<Value> {
        match self {
            Direction::Transform => contract.transform_in(value, crumbs),
            Direction::Restore => contract.restore_in(value, crumbs),
        }
    }
}

fn object_direction(
    shape: &Shape,
    direction: Direction,
    value: &Value,
    crumbs: &Breadcrumbs,
) -> Result<Value> {
    let input = expect_object(value, crumbs)?;
    let mut output = Map::new();
    for (key, child) in shape.iter() {
        match input.get(key) {
            Some(entry) => {
                let tag = format!("object:{}['{key}']", direction.name());
                output.insert(key.clone(), direction.run(child, entry, &crumbs.with(tag))?);
            }
            None if child.is_optional() => {}
            None => {
                return Err(Error::MissingKey {
                    key: key.clone(),
                    trail: crumbs.render(),
                })
            }
        }
    }
    Ok(Value::Object(output))
}

/// Fixed-shape object combinator.
///
/// The declared keys define the complete key set in both directions;
/// undeclared input keys are silently dropped. Keys whose child contract
/// carries the `optional` attribute may be absent, every other declared
/// key is required. Declaration order is preserved in the output and in
/// [`extend_object`](crate::modifiers::extend_object) merges.
pub fn object<I, K>(shape: I) -> Contract
where
    I: IntoIterator<Item = (K, Contract)>,
    K: Into<String>,
{
    let shape: Shape = Arc::new(
        shape
            .into_iter()
            .map(|(key, child)| (key.into(), child))
            .collect(),
    );
    object_from_shape(shape)
}

pub(crate) fn object_from_shape(shape: Shape) -> Contract {
    let transform_shape = Arc::clone(&shape);
    let restore_shape = Arc::clone(&shape);
    Contract::new(
        move |value, crumbs| object_direction(&transform_shape, Direction::Transform, value, crumbs),
        move |literal, crumbs| object_direction(&restore_shape, Direction::Restore, literal, crumbs),
    )
    .with_shape(shape)
}

/// Homogeneous sequence combinator: every element goes through the item
/// contract, breadcrumb-tagged with its index.
pub fn array(item: Contract) -> Contract {
    let transform_item = item.clone();
    let restore_item = item;
    Contract::new(
        move |value, crumbs| {
            let elements = expect_array(value, crumbs)?;
            elements
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    transform_item
                        .transform_in(element, &crumbs.with(format!("array:transform[{index}]")))
                })
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        },
        move |literal, crumbs| {
            let elements = expect_array(literal, crumbs)?;
            elements
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    restore_item
                        .restore_in(element, &crumbs.with(format!("array:restore[{index}]")))
                })
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        },
    )
}

fn record_direction(
    keys: &Contract,
    values: &Contract,
    direction: Direction,
    value: &Value,
    crumbs: &Breadcrumbs,
) -> Result<Value> {
    let input = expect_object(value, crumbs)?;
    let mut output = Map::new();
    for (key, entry) in input {
        let tagged = crumbs.with(format!("record:{}['{key}']", direction.name()));
        let mapped_key = direction.run(keys, &Value::String(key.clone()), &tagged)?;
        let mapped_key = match mapped_key {
            Value::String(text) => text,
            other => {
                return Err(Error::Validation {
                    message: format!(
                        "record key must remain a string, received {}",
                        kind_of(&other)
                    ),
                    value: other,
                    trail: tagged.render(),
                })
            }
        };
        output.insert(mapped_key, direction.run(values, entry, &tagged)?);
    }
    Ok(Value::Object(output))
}

/// Homogeneous string-keyed mapping with an open key set.
///
/// Unlike [`object`], the keys are not declared in advance: every entry
/// present is processed, keys through `keys` and values through `values`,
/// with no required/optional enforcement at this level.
pub fn record(keys: Contract, values: Contract) -> Contract {
    let transform_pair = (keys.clone(), values.clone());
    let restore_pair = (keys, values);
    Contract::new(
        move |value, crumbs| {
            record_direction(
                &transform_pair.0,
                &transform_pair.1,
                Direction::Transform,
                value,
                crumbs,
            )
        },
        move |literal, crumbs| {
            record_direction(
                &restore_pair.0,
                &restore_pair.1,
                Direction::Restore,
                literal,
                crumbs,
            )
        },
    )
}
