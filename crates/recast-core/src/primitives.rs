//! Leaf-level contracts for the literal primitive kinds
//!
//! Primitive contracts are reflexive: they validate but never reshape, so
//! transform and restore run the same check and pass the value through
//! unchanged. The whole family is expressed through the [`Check`] variants
//! so containers can still name their element type meaningfully even when
//! the element is the unchecked escape hatch.
//!
//! Copyright (c) 2025 Recast Team
//! Licensed under the Apache-2.0 license

use crate::contract::Contract;
use crate::error::{kind_of, Error};
use crate::path::Breadcrumbs;
use crate::Result;
use serde_json::Value;
use std::sync::Arc;

/// Predicate over a candidate value.
pub type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// Builds the rejection message for a failed predicate.
pub type Reason = dyn Fn(&Value) -> String + Send + Sync;

/// The primitive-contract family.
#[derive(Clone)]
pub enum Check {
    /// Accept anything, verbatim. Bypasses all invariants.
    Any,
    /// Accept values satisfying the predicate; reject with `reason(value)`.
    Validated {
        predicate: Arc<Predicate>,
        reason: Arc<Reason>,
    },
    /// Accept only values deeply equal to the constant.
    Literal(Value),
}

impl Check {
    fn run(&self, value: &Value, crumbs: &Breadcrumbs) -> Result<Value> {
        match self {
            Check::Any => Ok(value.clone()),
            Check::Validated { predicate, reason } => {
                if predicate(value) {
                    Ok(value.clone())
                } else {
                    Err(Error::Validation {
                        message: reason(value),
                        value: value.clone(),
                        trail: crumbs.render(),
                    })
                }
            }
            Check::Literal(expected) => {
                if value == expected {
                    Ok(value.clone())
                } else {
                    Err(Error::LiteralMismatch {
                        expected: expected.clone(),
                        found: value.clone(),
                        trail: crumbs.render(),
                    })
                }
            }
        }
    }

    /// Build the reflexive contract running this check in both directions.
    pub fn into_contract(self) -> Contract {
        let for_restore = self.clone();
        Contract::new(
            move |value, crumbs| self.run(value, crumbs),
            move |literal, crumbs| for_restore.run(literal, crumbs),
        )
    }
}

/// Contract accepting values that satisfy `predicate`, in both directions.
/// The value passes through unchanged; `reason` renders the failure message.
pub fn validated<P, R>(predicate: P, reason: R) -> Contract
where
    P: Fn(&Value) -> bool + Send + Sync + 'static,
    R: Fn(&Value) -> String + Send + Sync + 'static,
{
    Check::Validated {
        predicate: Arc::new(predicate),
        reason: Arc::new(reason),
    }
    .into_contract()
}

fn kind_checked(kind: &'static str, predicate: fn(&Value) -> bool) -> Contract {
    validated(predicate, move |value| {
        format!("expected {kind}, received {}", kind_of(value))
    })
    .labeled(kind)
}

/// Contract over literal strings.
pub fn string() -> Contract {
    kind_checked("string", Value::is_string)
}

/// Contract over literal numbers.
pub fn number() -> Contract {
    kind_checked("number", Value::is_number)
}

/// Contract over literal booleans.
pub fn boolean() -> Contract {
    kind_checked("boolean", Value::is_boolean)
}

/// Contract over the literal null.
pub fn null() -> Contract {
    kind_checked("null", Value::is_null)
}

/// Contract accepting only values deeply equal to `value`. Used as the
/// structural discriminator tag inside union variants.
pub fn literal(value: Value) -> Contract {
    Check::Literal(value).into_contract().labeled("literal")
}

/// The unchecked identity contract. Escape hatch: transform and restore
/// both return the input verbatim.
pub fn any() -> Contract {
    Check::Any.into_contract()
}
