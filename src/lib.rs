// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod codegen;
pub mod error;
pub mod key;

// Re-export key types for convenience
pub use codegen::ArrayInitializer;
pub use error::KeyError;
pub use key::{DecryptionKey, KEY_HEX_LEN, KEY_LEN};
