use crate::cipher::classify::Position;
use crate::cipher::utf8::{char_at, char_width, previous_char_start};

/// How a letter's position is moved through its alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftStrategy {
    /// Modular arithmetic on the letter index. Only valid when every letter is
    /// a single byte, so index and byte offset coincide.
    Arithmetic,
    /// Step letter by letter through the encoded alphabet. Works for any mix
    /// of widths; O(shift) per character.
    ByteWalk,
}

impl ShiftStrategy {
    /// Arithmetic when both alphabets are single-byte, byte walk otherwise
    pub fn for_alphabets(uppercase: &str, lowercase: &str) -> Self {
        if uppercase.is_ascii() && lowercase.is_ascii() {
            Self::Arithmetic
        } else {
            Self::ByteWalk
        }
    }

    /// The letter `shift` places away from `position` in `alphabet`
    pub fn apply<'a>(self, alphabet: &'a str, position: Position, shift: i64) -> &'a str {
        match self {
            Self::Arithmetic => {
                let len = alphabet.len();
                let index = shift_arithmetic(position.index, shift, len);
                &alphabet[index..index + 1]
            }
            Self::ByteWalk => shift_byte_walk(alphabet, position.offset, shift),
        }
    }
}

/// New index after moving `shift` places through `len` letters
pub fn shift_arithmetic(index: usize, shift: i64, len: usize) -> usize {
    let len = len as i64;
    let sum = index as i64 + shift;
    let moved = if sum >= 0 { sum % len } else { (len + sum).rem_euclid(len) };
    moved as usize
}

/// Letter reached by walking `shift` letters from the one at byte `offset`
pub fn shift_byte_walk(alphabet: &str, offset: usize, shift: i64) -> &str {
    let final_offset = if shift > 0 {
        walk_forward(alphabet.as_bytes(), offset, shift.unsigned_abs())
    } else {
        walk_backward(alphabet.as_bytes(), offset, shift.unsigned_abs())
    };
    char_at(alphabet, final_offset)
}

fn walk_forward(bytes: &[u8], mut offset: usize, steps: u64) -> usize {
    let mut width = char_width(bytes[offset]).unwrap_or(1);
    for _ in 0..steps {
        offset = (offset + width) % bytes.len();
        width = char_width(bytes[offset]).unwrap_or(1);
    }
    offset
}

fn walk_backward(bytes: &[u8], mut offset: usize, steps: u64) -> usize {
    for _ in 0..steps {
        offset = previous_char_start(bytes, offset);
    }
    offset
}
