mod bytes;
mod decode;
mod error;
mod scalar;
mod shape;
mod stack;
mod value;

/// Recursive-descent entry points and per-call options.
pub use decode::{DecodeOptions, decode, decode_str};
/// Error, error-kind, and result aliases.
pub use error::{DecodeError, ErrorKind, Result};
/// Composite materialization post-pass.
pub use shape::materialize;
/// Explicit-stack entry point for deeply nested input.
pub use stack::decode_iterative;
/// Decoded runtime value types.
pub use value::{Composite, Entry, Field, Key, Mapping, Record, Value};
