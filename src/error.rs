// src/error.rs

/// Error produced while validating a textual decryption key.
///
/// Both variants are terminal for the configuration pass that requested the
/// key: the caller must surface the message and abort, never fall back to a
/// default key.
#[derive(Debug, thiserror::Error, Copy, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Input does not have the required number of characters.
    #[error("decryption key must be 32 hex characters (16 bytes), got {found}")]
    Length { found: usize },

    /// A two-character group failed hexadecimal parsing.
    #[error("decryption key must be hex values from 00 to FF, got \"{hi}{lo}\" for byte {index}")]
    Format { hi: char, lo: char, index: usize },
}

// No manual Display impl needed - thiserror handles it.
// No manual std::error::Error impl needed - thiserror handles it when its 'std' feature is enabled.
