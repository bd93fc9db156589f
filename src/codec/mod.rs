mod alphabet;
mod core;
mod error;


pub use self::alphabet::{
    INVALID, PAD, PADDING, REVERSE, STANDARD_ALPHABET, URL_SAFE_ALPHABET, Variant, WHITESPACE,
};
pub use self::core::{decode, decoded_len_estimate, encode, encode_to_string, encoded_len};
pub use self::error::DecodeError;
