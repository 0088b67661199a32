//! The bidirectional contract abstraction
//!
//! A [`Contract`] pairs two directions over the same logical shape:
//! `transform` flattens a value down into its literal representation and
//! `restore` validates a literal back up into a value. Both directions
//! thread a [`Breadcrumbs`] stack so failures anywhere in a composed tree
//! report their exact location.
//!
//! Contracts are pure, immutable descriptors: they are built once
//! (typically at module-initialization time), hold no per-call state, and
//! are cheaply cloneable because the two direction closures live behind
//! shared `Arc`s.

use crate::path::Breadcrumbs;
use crate::Result;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Open attribute bag carried by every contract, used for modifier flags
/// such as `optional: true`.
pub type Attributes = Map<String, Value>;

/// One direction of a contract: a total-or-failing function from a value
/// and the current breadcrumb stack to the opposite representation.
pub type OpFn = dyn Fn(&Value, &Breadcrumbs) -> Result<Value> + Send + Sync;

pub(crate) type Shape = Arc<Vec<(String, Contract)>>;

/// A bidirectional value/literal mapping.
#[derive(Clone)]
pub struct Contract {
    transform_fn: Arc<OpFn>,
    restore_fn: Arc<OpFn>,
    attributes: Attributes,
    // Declared key shape, present only on contracts built by `object()`.
    // Consumed by `extend_object()` to merge two fixed shapes.
    shape: Option<Shape>,
}

impl Contract {
    /// Build a contract from its two direction closures, with an empty
    /// attribute bag.
    pub fn new<T, R>(transform: T, restore: R) -> Self
    where
        T: Fn(&Value, &Breadcrumbs) -> Result<Value> + Send + Sync + 'static,
        R: Fn(&Value, &Breadcrumbs) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            transform_fn: Arc::new(transform),
            restore_fn: Arc::new(restore),
            attributes: Attributes::new(),
            shape: None,
        }
    }

    /// Flatten a value into its literal representation, starting from an
    /// empty breadcrumb stack.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::Error`] raised anywhere in the contract
    /// tree; the whole operation aborts at that point.
    pub fn transform(&self, value: &Value) -> Result<Value> {
        self.transform_in(value, &Breadcrumbs::new())
    }

    /// Validate a literal back up into a value, starting from an empty
    /// breadcrumb stack.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::Error`] raised anywhere in the contract
    /// tree; the whole operation aborts at that point.
    pub fn restore(&self, literal: &Value) -> Result<Value> {
        self.restore_in(literal, &Breadcrumbs::new())
    }

    /// Stack-threading form of [`Contract::transform`], used by combinators
    /// when delegating to children.
    pub fn transform_in(&self, value: &Value, crumbs: &Breadcrumbs) -> Result<Value> {
        (self.transform_fn)(value, crumbs)
    }

    /// Stack-threading form of [`Contract::restore`].
    pub fn restore_in(&self, literal: &Value, crumbs: &Breadcrumbs) -> Result<Value> {
        (self.restore_fn)(literal, crumbs)
    }

    /// Set an attribute, builder-style.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// The contract's attribute bag.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// True when the `optional` attribute is set, meaning the object
    /// combinator must not require this contract's key to be present.
    pub fn is_optional(&self) -> bool {
        self.attributes.get("optional") == Some(&Value::Bool(true))
    }

    /// Wrap this contract so that both directions push a fixed label onto
    /// the breadcrumb stack before delegating. Every primitive and the
    /// document combinator use this so their tags (`string:restore`,
    /// `document:transform`, ...) appear in failure trails.
    pub fn labeled(self, label: impl Into<String>) -> Self {
        let label = label.into();
        let inner_transform = Arc::clone(&self.transform_fn);
        let inner_restore = Arc::clone(&self.restore_fn);
        let transform_tag = format!("{label}:transform");
        let restore_tag = format!("{label}:restore");
        Self {
            transform_fn: Arc::new(move |value, crumbs| {
                inner_transform(value, &crumbs.with(transform_tag.clone()))
            }),
            restore_fn: Arc::new(move |literal, crumbs| {
                inner_restore(literal, &crumbs.with(restore_tag.clone()))
            }),
            attributes: self.attributes,
            shape: self.shape,
        }
    }

    pub(crate) fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub(crate) fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }
}

impl fmt::Debug for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contract")
            .field("attributes", &self.attributes)
            .field(
                "shape",
                &self.shape.as_ref().map(|s| {
                    s.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>()
                }),
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity() -> Contract {
        Contract::new(
            |value, _| Ok(value.clone()),
            |literal, _| Ok(literal.clone()),
        )
    }

    #[test]
    fn test_top_level_calls_start_at_root() {
        let seen = Contract::new(
            |_, crumbs| Ok(json!(crumbs.render())),
            |_, crumbs| Ok(json!(crumbs.render())),
        );
        assert_eq!(seen.transform(&json!(0)).unwrap(), json!("(root)"));
        assert_eq!(seen.restore(&json!(0)).unwrap(), json!("(root)"));
    }

    #[test]
    fn test_labeled_pushes_operation_tag() {
        let seen = Contract::new(
            |_, crumbs| Ok(json!(crumbs.render())),
            |_, crumbs| Ok(json!(crumbs.render())),
        )
        .labeled("string");
        assert_eq!(seen.transform(&json!(0)).unwrap(), json!("string:transform"));
        assert_eq!(seen.restore(&json!(0)).unwrap(), json!("string:restore"));
    }

    #[test]
    fn test_attributes_survive_labeling() {
        let contract = identity()
            .with_attribute("optional", json!(true))
            .labeled("thing");
        assert!(contract.is_optional());
    }

    #[test]
    fn test_is_optional_defaults_to_false() {
        assert!(!identity().is_optional());
    }

    #[test]
    fn test_clones_share_behavior() {
        let contract = identity();
        let clone = contract.clone();
        let value = json!({"k": [1, 2]});
        assert_eq!(
            contract.transform(&value).unwrap(),
            clone.transform(&value).unwrap()
        );
    }
}
