//! Public library API for decoding PHP `serialize()` text into value trees.

/// Wire-format cursor, scalar readers, composite decoders, and decoded value types.
pub mod wire;
