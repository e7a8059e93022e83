/// Decode-and-print command.
pub mod decode;
/// CLI error and result aliases.
pub mod error;
/// Input statistics command.
pub mod info;
/// Indented tree rendering for decoded values.
pub mod print;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod util;

pub use error::{CliError, Result};

/// Nesting ceiling applied by CLI commands unless overridden.
pub const DEFAULT_MAX_DEPTH: u32 = 512;
