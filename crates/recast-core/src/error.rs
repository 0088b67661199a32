//! Error types for the Recast core library
//!
//! This module defines the single failure discipline of the engine: every
//! violation raises an [`Error`] carrying the rendered breadcrumb trail at
//! the point of failure and, where meaningful, the offending value. No
//! combinator catches or recovers from a child's failure - the entire
//! transform/restore call aborts and the error propagates unchanged to the
//! outermost caller.

use serde_json::Value;
use thiserror::Error;

/// Main error type for Recast operations
#[derive(Error, Debug)]
pub enum Error {
    /// A validator predicate rejected the value. Primitive type mismatches
    /// surface here with an "expected X, received Y" message.
    #[error("Validation failed: {message} at {trail}")]
    Validation {
        message: String,
        value: Value,
        trail: String,
    },

    /// A fixed-literal contract received a value not deeply equal to its
    /// constant.
    #[error("Literal mismatch: expected {expected}, received {found} at {trail}")]
    LiteralMismatch {
        expected: Value,
        found: Value,
        trail: String,
    },

    /// An object or record combinator received a non-mapping literal.
    /// Arrays and null are explicitly not objects.
    #[error("Not an object: received {found} at {trail}")]
    NotAnObject {
        found: String,
        value: Value,
        trail: String,
    },

    /// An array combinator received a non-sequence literal.
    #[error("Not an array: received {found} at {trail}")]
    NotAnArray {
        found: String,
        value: Value,
        trail: String,
    },

    /// A declared, non-optional object key was absent from the input.
    #[error("Missing required object key '{key}' at {trail}")]
    MissingKey { key: String, trail: String },

    /// No union discriminator matched the candidate value.
    #[error("No matching union discriminator at {trail}")]
    NoDiscriminator { value: Value, trail: String },

    /// The embedded-document codec failed to encode or decode.
    #[error("Serialization failed: {message} at {trail}")]
    Serialization { message: String, trail: String },

    /// A combinator was composed from incompatible parts at construction
    /// time, before any transform/restore ran.
    #[error("Invalid contract composition: {message}")]
    Composition { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Name the literal kind of a value for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
