//! Discriminated union combinator
//!
//! A union is an ordered list of (discriminator, contract) pairs. The
//! discriminators are evaluated strictly in declaration order against the
//! candidate value - typed for transform, literal for restore - and the
//! first one to match wins. First-match is part of the caller contract,
//! not an implementation detail: the engine does not detect or reject
//! overlapping discriminator sets, so callers order them accordingly.
//!
//! Copyright (c) 2025 Recast Team
//! Licensed under the Apache-2.0 license

use crate::contract::Contract;
use crate::error::Error;
use crate::Result;
use serde_json::Value;
use std::sync::Arc;

/// Selects whether a variant's contract applies to a candidate value.
pub type Discriminator = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Build one (discriminator, contract) pair for [`union`].
pub fn variant<P>(predicate: P, contract: Contract) -> (Discriminator, Contract)
where
    P: Fn(&Value) -> bool + Send + Sync + 'static,
{
    (Box::new(predicate), contract)
}

fn select<'a>(
    variants: &'a [(Discriminator, Contract)],
    candidate: &Value,
) -> Option<(usize, &'a Contract)> {
    variants
        .iter()
        .enumerate()
        .find_map(|(index, (discriminator, contract))| {
            discriminator(candidate).then_some((index, contract))
        })
}

/// Discriminated union over an ordered set of variants.
///
/// # Errors
///
/// Transform and restore raise [`Error::NoDiscriminator`] when no variant
/// matches the candidate value.
pub fn union(variants: Vec<(Discriminator, Contract)>) -> Contract {
    let variants = Arc::new(variants);
    let transform_variants = Arc::clone(&variants);
    let restore_variants = variants;
    Contract::new(
        move |value, crumbs| match select(&transform_variants, value) {
            Some((index, contract)) => {
                log::trace!("union transform matched variant {index}");
                contract.transform_in(value, &crumbs.with(format!("union:transform[{index}]")))
            }
            None => Err(Error::NoDiscriminator {
                value: value.clone(),
                trail: crumbs.render(),
            }),
        },
        move |literal, crumbs| match select(&restore_variants, literal) {
            Some((index, contract)) => {
                log::trace!("union restore matched variant {index}");
                contract.restore_in(literal, &crumbs.with(format!("union:restore[{index}]")))
            }
            None => Err(Error::NoDiscriminator {
                value: literal.clone(),
                trail: crumbs.render(),
            }),
        },
    )
}
