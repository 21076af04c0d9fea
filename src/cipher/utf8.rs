/// Encoded width of a character from its leading byte, `None` for a
/// continuation or otherwise invalid leading byte.
pub fn char_width(lead: u8) -> Option<usize> {
    if lead & 0x80 == 0x00 {
        Some(1) // 0xxxxxxx
    } else if lead & 0xE0 == 0xC0 {
        Some(2) // 110xxxxx
    } else if lead & 0xF0 == 0xE0 {
        Some(3) // 1110xxxx
    } else if lead & 0xF8 == 0xF0 {
        Some(4) // 11110xxx
    } else {
        None
    }
}

/// The single character starting at byte `offset`.
///
/// `offset` must sit on a leading byte of `text`.
pub fn char_at(text: &str, offset: usize) -> &str {
    let bytes = text.as_bytes();
    let width = char_width(bytes[offset]).unwrap_or(1);
    &text[offset..(offset + width).min(bytes.len())]
}

/// Step one byte backwards, wrapping from the first byte to the last.
pub fn previous_byte(offset: usize, len: usize) -> usize {
    if offset == 0 {
        len - 1
    } else {
        offset - 1
    }
}

/// Leading byte of the character before the one at `offset`, wrapping to the
/// last character when `offset` is 0.
///
/// Lands on an arbitrary byte first, then keeps stepping back until that byte
/// decodes as a valid leading byte.
pub fn previous_char_start(bytes: &[u8], offset: usize) -> usize {
    let mut position = previous_byte(offset, bytes.len());
    while char_width(bytes[position]).is_none() {
        position = previous_byte(position, bytes.len());
    }
    position
}
