//! Caesar - shift cipher over English and Spanish alphabets
//!
//! Every letter of the input is moved a number of places (the *level*)
//! through its alphabet, wrapping around at the end. Encryption moves
//! forwards, decryption backwards. Case is preserved and characters outside
//! the alphabet are copied unchanged.
//!
//! ## Alphabets
//!
//! ```text
//! en  ABCDEFGHIJKLMNOPQRSTUVWXYZ    levels 1..=26
//! sp  ABCDEFGHIJKLMNÑOPQRSTUVWXYZ   levels 1..=27
//! ```
//!
//! Letters are located by their UTF-8 encoding. Alphabets made only of
//! single-byte letters are shifted arithmetically; others are walked letter by
//! letter.
//!
//! ## Example
//!
//! ```
//! use caesar::cipher::{select_language, transform, Intent};
//!
//! let ctx = select_language("en").unwrap();
//! assert_eq!(transform("HELLO", &ctx, Intent::Encrypt, 5), "MJQQT\n");
//!
//! let ctx = select_language("sp").unwrap();
//! assert_eq!(transform("N", &ctx, Intent::Encrypt, 1), "Ñ\n");
//! ```

pub mod alphabet;
pub mod cipher;
pub mod cli;
pub mod error;

pub use alphabet::{Language, LetterCase};
pub use cipher::{select_language, transform, transform_bulk, Intent, TransformationContext};
pub use error::{CaesarError, Result};
