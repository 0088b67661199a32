//! Recast Core - composable bidirectional value/literal contracts
//!
//! This crate provides a bidirectional data-shape description engine over
//! the JSON-compatible value subset (`serde_json::Value`). Callers compose
//! [`Contract`] values bottom-up; each contract can `transform` a value
//! down into literal form and `restore` a literal back up into a validated
//! value, with a breadcrumb path stack threading through arbitrarily deep
//! composition so failures report exact locations.
//!
//! # Main Components
//!
//! - **Primitives**: `string`, `number`, `boolean`, `null`, `literal`,
//!   `validated`, and the `any` escape hatch
//! - **Containers**: fixed-shape `object`, homogeneous `array`, open-keyed
//!   `record`
//! - **Unions**: first-match discriminated `union`
//! - **Documents**: `document` contracts embedding serialized sub-documents
//!   through a pluggable [`Codec`]
//! - **Modifiers**: `optional`, `nullable`, `extend_object`, `lazy`
//!
//! # Example
//!
//! ```
//! use recast_core::{array, object, optional, string, number, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let schema = object([
//!         ("name", string()),
//!         ("scores", array(number())),
//!         ("nickname", optional(string())),
//!     ]);
//!     let restored = schema.restore(&json!({"name": "ada", "scores": [1, 2]}))?;
//!     assert_eq!(restored, json!({"name": "ada", "scores": [1, 2]}));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod containers;
pub mod contract;
pub mod document;
pub mod error;
pub mod modifiers;
pub mod path;
pub mod primitives;
pub mod union;

// Re-export the construction surface for convenience
pub use containers::{array, object, record};
pub use contract::{Attributes, Contract, OpFn};
pub use document::{default_codec, document, document_with, set_default_codec, Codec};
pub use error::{kind_of, Error, Result};
pub use modifiers::{extend_object, lazy, nullable, optional};
pub use path::Breadcrumbs;
pub use primitives::{any, boolean, literal, null, number, string, validated, Check};
pub use union::{union, variant, Discriminator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_flat_reexports_compose() {
        let schema = object([("tag", literal(json!("point"))), ("x", number())]);
        let value = json!({"tag": "point", "x": 3});
        assert_eq!(schema.restore(&value).unwrap(), value);
    }
}
