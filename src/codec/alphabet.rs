/// Conventional alphabet (RFC 4648 §4). Output is padded with `=`.
pub const STANDARD_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL and filename safe alphabet (RFC 4648 §5). Output is never padded.
pub const URL_SAFE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Pad character appended by the standard variant.
pub const PAD: u8 = b'=';

/// Reverse-table sentinel: not a symbol of either alphabet.
pub const INVALID: u8 = 0xFF;
/// Reverse-table sentinel: ignorable whitespace (tab, LF, CR, space).
pub const WHITESPACE: u8 = 0xFE;
/// Reverse-table sentinel: the pad character.
pub const PADDING: u8 = 0xFD;

/// Which alphabet governs encoding. Decoding accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Standard,
    UrlSafe,
}

impl Variant {
    /// Forward table: symbol index (0..64) to character.
    #[inline]
    pub const fn alphabet(self) -> &'static [u8; 64] {
        match self {
            Variant::Standard => STANDARD_ALPHABET,
            Variant::UrlSafe => URL_SAFE_ALPHABET,
        }
    }

    /// Whether short final groups are right-padded to 4 symbols.
    #[inline]
    pub const fn is_padded(self) -> bool {
        matches!(self, Variant::Standard)
    }
}

/// Union of both alphabets: character code to 6-bit value, or one of
/// [`INVALID`], [`WHITESPACE`], [`PADDING`].
pub static REVERSE: [u8; 256] = build_reverse();

const fn build_reverse() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[STANDARD_ALPHABET[i] as usize] = i as u8;
        table[URL_SAFE_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table[b'\t' as usize] = WHITESPACE;
    table[b'\n' as usize] = WHITESPACE;
    table[b'\r' as usize] = WHITESPACE;
    table[b' ' as usize] = WHITESPACE;
    table[PAD as usize] = PADDING;
    table
}
