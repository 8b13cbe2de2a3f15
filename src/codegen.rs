// src/codegen.rs

use core::fmt;

use crate::key::DecryptionKey;

/// Formats a key as a brace-enclosed, comma-separated list of decimal byte
/// values, e.g. `{170, 187, 204, ...}`.
///
/// This is the form a configuration pass splices into generated source as a
/// fixed-size array initializer, so the firmware component receives the key
/// without any runtime parsing. Byte order is the parse order of the hex
/// pairs.
///
/// Obtained via [`DecryptionKey::initializer`].
#[derive(Debug, Copy, Clone)]
pub struct ArrayInitializer<'a> {
    key: &'a DecryptionKey,
}

impl<'a> ArrayInitializer<'a> {
    pub(crate) fn new(key: &'a DecryptionKey) -> Self {
        Self { key }
    }
}

impl fmt::Display for ArrayInitializer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, byte) in self.key.as_bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", byte)?;
        }
        f.write_str("}")
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use heapless::String as HeaplessString;

    use crate::key::DecryptionKey;

    fn render(key: &DecryptionKey) -> HeaplessString<128> {
        let mut output = HeaplessString::new();
        write!(output, "{}", key.initializer()).unwrap();
        output
    }

    #[test]
    fn test_initializer_formatting() {
        let key = DecryptionKey::parse("AaBbCcDdEeFf00112233445566778899").unwrap();
        assert_eq!(
            render(&key).as_str(),
            "{170, 187, 204, 221, 238, 255, 0, 17, 34, 51, 68, 85, 102, 119, 136, 153}"
        );
    }

    #[test]
    fn test_initializer_zero_key() {
        let key = DecryptionKey::from([0u8; 16]);
        assert_eq!(
            render(&key).as_str(),
            "{0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0}"
        );
    }

    #[test]
    fn test_initializer_has_no_trailing_separator() {
        let key = DecryptionKey::from([255u8; 16]);
        let rendered = render(&key);
        assert!(rendered.as_str().ends_with("255}"));
        assert!(!rendered.as_str().contains(", }"));
    }
}
