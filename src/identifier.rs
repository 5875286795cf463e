//! 32-byte identifiers used as whitelist uuid and pool id seed material

use uuid::Uuid;

pub const IDENTIFIER_LEN: usize = 32;

/// Fixed-width identifier fed into PDA derivation and instruction data.
///
/// Always exactly 32 bytes; deterministic for named and raw input,
/// random only when freshly generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier([u8; IDENTIFIER_LEN]);

impl Identifier {
    /// Fresh random identifier: a UUID v4 with the separators stripped,
    /// leaving 32 hex characters encoded as ASCII bytes.
    pub fn random() -> Self {
        let mut buf = [0u8; IDENTIFIER_LEN];
        Uuid::new_v4().simple().encode_lower(&mut buf);
        Self(buf)
    }

    /// Deterministic identifier from a short human-readable name:
    /// UTF-8 bytes, zero-padded or truncated to 32.
    pub fn from_name(name: &str) -> Self {
        let mut buf = [0u8; IDENTIFIER_LEN];
        let bytes = name.as_bytes();
        let len = bytes.len().min(IDENTIFIER_LEN);
        buf[..len].copy_from_slice(&bytes[..len]);
        Self(buf)
    }

    /// 32 raw bytes, passed through unchanged.
    pub fn from_bytes(bytes: [u8; IDENTIFIER_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; IDENTIFIER_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Identifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
