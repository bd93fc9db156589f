//! Binary-to-text codec over a 64-symbol alphabet.
//!
//! Two variants share 62 symbols and differ in values 62 and 63:
//! [`Variant::Standard`] uses `+` `/` and pads to a multiple of 4 with `=`,
//! [`Variant::UrlSafe`] uses `-` `_` and never pads. [`decode`] accepts
//! either alphabet, optional padding, and embedded whitespace.
//!
//! ```
//! use b64conv::{PAD, STANDARD_ALPHABET, URL_SAFE_ALPHABET, Variant, decode, encode};
//!
//! assert_eq!(&STANDARD_ALPHABET[62..], b"+/");
//! assert_eq!(&URL_SAFE_ALPHABET[62..], b"-_");
//! assert_eq!(PAD, b'=');
//! assert_eq!(encode(b"Man", Variant::Standard), b"TWFu");
//! assert_eq!(encode([0u8], Variant::UrlSafe), b"AA");
//! assert_eq!(decode("AA==").unwrap(), [0u8]);
//! ```

pub mod codec;
pub mod common;

pub use codec::{
    DecodeError, PAD, STANDARD_ALPHABET, URL_SAFE_ALPHABET, Variant, decode,
    decoded_len_estimate, encode, encode_to_string, encoded_len,
};
