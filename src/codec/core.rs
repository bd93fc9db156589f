use super::alphabet::{INVALID, PAD, PADDING, REVERSE, Variant, WHITESPACE};
use super::error::DecodeError;

/// Exact number of symbols `encode` produces for `n` input bytes.
///
/// `n` is a buffer length, so at most `isize::MAX`; the result always fits.
#[inline]
pub fn encoded_len(n: usize, variant: Variant) -> usize {
    debug_assert!(n <= isize::MAX as usize);
    if variant.is_padded() {
        n.div_ceil(3) * 4
    } else {
        n / 3 * 4
            + match n % 3 {
                0 => 0,
                1 => 2,
                _ => 3,
            }
    }
}

/// Upper bound on the bytes `decode` produces for `n` input bytes.
/// Whitespace and padding only make the real output shorter.
#[inline]
pub fn decoded_len_estimate(n: usize) -> usize {
    n.div_ceil(4) * 3
}

/// Encode `data` with the alphabet and padding policy of `variant`.
///
/// Every 3-byte group becomes 4 symbols. A trailing 2-byte group yields
/// 3 symbols and a trailing 1-byte group yields 2; the standard variant
/// pads those to 4 with `=`, the URL-safe variant leaves them short.
pub fn encode(data: impl AsRef<[u8]>, variant: Variant) -> Vec<u8> {
    let data = data.as_ref();
    let table = variant.alphabet();
    let mut out = Vec::with_capacity(encoded_len(data.len(), variant));

    for group in data.chunks(3) {
        // Left-aligned in 24 bits; missing trailing bytes stay zero.
        let mut packed = 0u32;
        for (i, &b) in group.iter().enumerate() {
            packed |= (b as u32) << ((2 - i) * 8);
        }

        let symbols = group.len() + 1;
        for j in 0..symbols {
            let index = (packed >> ((3 - j) * 6)) & 0x3F;
            out.push(table[index as usize]);
        }

        if variant.is_padded() {
            for _ in symbols..4 {
                out.push(PAD);
            }
        }
    }

    out
}

/// Same as [`encode`], returned as a `String` (the output is always ASCII).
pub fn encode_to_string(data: impl AsRef<[u8]>, variant: Variant) -> String {
    encode(data, variant).into_iter().map(char::from).collect()
}

/// Decode symbols from either alphabet back into bytes.
///
/// Tab, LF, CR and space are skipped anywhere. Padding is optional, but
/// when present it must be the last non-whitespace run and must complete
/// the final group to 4 symbols.
pub fn decode(data: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let data = data.as_ref();
    let mut out = Vec::with_capacity(decoded_len_estimate(data.len()));

    let mut group = [0u8; 4];
    let mut filled = 0usize;
    let mut last_symbol = 0usize;
    let mut pads = 0usize;
    let mut first_pad = 0usize;

    for (position, &byte) in data.iter().enumerate() {
        match REVERSE[byte as usize] {
            WHITESPACE => {}
            PADDING => {
                // A pad run must follow at least one symbol of its group.
                if pads == 0 && filled == 0 {
                    return Err(DecodeError::InvalidSymbol { byte, position });
                }
                if pads == 2 {
                    return Err(DecodeError::InvalidSymbol { byte, position });
                }
                if pads == 0 {
                    first_pad = position;
                }
                pads += 1;
            }
            INVALID => return Err(DecodeError::InvalidSymbol { byte, position }),
            value => {
                // No symbols once padding has started.
                if pads > 0 {
                    return Err(DecodeError::InvalidSymbol { byte, position });
                }
                group[filled] = value;
                filled += 1;
                last_symbol = position;
                if filled == 4 {
                    unpack_group(&group, 4, &mut out);
                    filled = 0;
                }
            }
        }
    }

    if filled == 1 {
        return Err(DecodeError::InvalidSymbol {
            byte: data[last_symbol],
            position: last_symbol,
        });
    }
    if pads > 0 && filled + pads != 4 {
        return Err(DecodeError::InvalidSymbol {
            byte: PAD,
            position: first_pad,
        });
    }
    if filled > 0 {
        unpack_group(&group, filled, &mut out);
    }

    Ok(out)
}

/// Repack `symbols` 6-bit values (2..=4) and emit `symbols - 1` bytes.
/// Low bits of a short group that do not fill a whole byte are dropped.
#[inline]
fn unpack_group(group: &[u8; 4], symbols: usize, out: &mut Vec<u8>) {
    let mut packed = 0u32;
    for (j, &value) in group[..symbols].iter().enumerate() {
        packed |= (value as u32) << ((3 - j) * 6);
    }
    for i in 0..symbols - 1 {
        out.push((packed >> ((2 - i) * 8)) as u8);
    }
}
