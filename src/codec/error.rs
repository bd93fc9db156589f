use thiserror::Error;

/// Malformed decode input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A byte that is not a symbol of either alphabet, a pad outside the
    /// trailing pad run, a pad run that does not complete the final group,
    /// or the lone symbol of a one-symbol final group.
    #[error("invalid symbol {} at position {position}", describe(.byte))]
    InvalidSymbol { byte: u8, position: usize },
}

impl DecodeError {
    /// The offending byte.
    pub fn byte(&self) -> u8 {
        match *self {
            DecodeError::InvalidSymbol { byte, .. } => byte,
        }
    }

    /// Zero-based offset of the offending byte in the caller's input.
    pub fn position(&self) -> usize {
        match *self {
            DecodeError::InvalidSymbol { position, .. } => position,
        }
    }
}

fn describe(byte: &u8) -> String {
    let byte = *byte;
    if byte.is_ascii_graphic() {
        format!("'{}' (0x{:02x})", byte as char, byte)
    } else {
        format!("0x{:02x}", byte)
    }
}
