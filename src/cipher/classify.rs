use crate::alphabet::LetterCase;
use crate::cipher::context::TransformationContext;
use crate::cipher::utf8::char_width;

/// Where a letter sits inside its alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based letter index
    pub index: usize,
    /// Byte offset of the letter's leading byte
    pub offset: usize,
}

/// Tag of a classified character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase(Position),
    Lowercase(Position),
    Other,
}

impl CharClass {
    pub fn case(&self) -> Option<LetterCase> {
        match self {
            Self::Uppercase(_) => Some(LetterCase::Upper),
            Self::Lowercase(_) => Some(LetterCase::Lower),
            Self::Other => None,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Uppercase(p) | Self::Lowercase(p) => Some(*p),
            Self::Other => None,
        }
    }
}

/// A decoded input character and its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub character: &'a str,
    pub class: CharClass,
}

/// Look a character up in the uppercase alphabet, then the lowercase one
pub fn classify<'a>(character: &'a str, ctx: &TransformationContext) -> Classified<'a> {
    let class = if let Some(p) = search(character, ctx.uppercase()) {
        CharClass::Uppercase(p)
    } else if let Some(p) = search(character, ctx.lowercase()) {
        CharClass::Lowercase(p)
    } else {
        CharClass::Other
    };

    Classified { character, class }
}

/// Linear scan stopping at the first exact byte match
fn search(character: &str, alphabet: &str) -> Option<Position> {
    let bytes = alphabet.as_bytes();
    let needle = character.as_bytes();
    let mut offset = 0;
    let mut index = 0;

    while offset < bytes.len() {
        let width = char_width(bytes[offset]).unwrap_or(1);
        let end = (offset + width).min(bytes.len());
        if &bytes[offset..end] == needle {
            return Some(Position { index, offset });
        }
        offset = end;
        index += 1;
    }

    None
}
