// DER TLV Parser
// Locates tagged elements inside opaque byte buffers

use std::fmt;

/// Smallest element (tag + length header + payload) accepted by the parser
pub const MIN_ELEMENT_LEN: usize = 4;

/// One parsed DER element.
///
/// `content` spans the whole element, header included, so it can be reused
/// as raw bytes or parsed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvElement<'a> {
    tag: u8,
    content: &'a [u8],
}

/// Total element length (header + payload) advertised by the header at `bytes[0]`
fn element_length(bytes: &[u8]) -> Option<usize> {
    match *bytes.get(1)? {
        0x82 => {
            let high = *bytes.get(2)? as usize;
            let low = *bytes.get(3)? as usize;
            Some(((high << 8) | low) + 4)
        }
        0x81 => Some(*bytes.get(2)? as usize + 3),
        short => Some(short as usize + 2),
    }
}

impl<'a> TlvElement<'a> {
    /// Find the first element with `tag` in `buffer`.
    ///
    /// Bytes before the first occurrence of `tag` are skipped without
    /// validation. Returns `None` when the tag is absent, fewer than five
    /// bytes remain, the advertised length overruns the buffer, or the
    /// element is shorter than [`MIN_ELEMENT_LEN`].
    pub fn parse(tag: u8, buffer: &'a [u8]) -> Option<Self> {
        Self::locate(tag, buffer).map(|(_, element)| element)
    }

    /// Like [`parse`](Self::parse), also returning the element's offset in `buffer`
    fn locate(tag: u8, buffer: &'a [u8]) -> Option<(usize, Self)> {
        if buffer.len() <= 4 {
            return None;
        }

        let start = buffer.iter().position(|&b| b == tag)?;
        let trimmed = &buffer[start..];
        if trimmed.len() <= 4 {
            return None;
        }

        let length = element_length(trimmed)?;
        if length < MIN_ELEMENT_LEN || length > trimmed.len() {
            return None;
        }

        Some((
            start,
            Self {
                tag: trimmed[0],
                content: &trimmed[..length],
            },
        ))
    }

    /// The identifier octet
    pub fn tag(&self) -> u8 {
        self.tag
    }

    /// Total length including the tag and length header
    pub fn length(&self) -> usize {
        self.content.len()
    }

    /// The element's bytes, header included
    pub fn content(&self) -> &'a [u8] {
        self.content
    }

    /// Size of the tag + length header
    pub fn header_len(&self) -> usize {
        match self.content[1] {
            0x82 => 4,
            0x81 => 3,
            _ => 2,
        }
    }

    /// The payload without the tag + length header
    pub fn value(&self) -> &'a [u8] {
        &self.content[self.header_len()..]
    }

    /// Walk forward through same-tag elements inside this element and return
    /// the last one that ends exactly at the end of this element.
    ///
    /// After a candidate ending at the end is found, scanning resumes one byte
    /// past its start so a later nested candidate can replace it. Any other
    /// match is skipped as a whole. Scanning stops when no further element
    /// parses; `None` if no candidate ever reached the end.
    pub fn last(&self) -> Option<TlvElement<'a>> {
        let data = self.content;
        let mut cursor = 0;
        let mut best = None;

        while cursor < data.len() {
            let Some((offset, found)) = Self::locate(self.tag, &data[cursor..]) else {
                break;
            };
            let start = cursor + offset;
            let end = start + found.length();

            if end == data.len() {
                best = Some(found);
                cursor = start + 1;
            } else {
                cursor = end;
            }
        }

        best
    }
}

impl fmt::Display for TlvElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tag=0x{:02X} len={} {}",
            self.tag,
            self.length(),
            hex::encode(self.content)
        )
    }
}

/// Iterate over consecutive `tag` elements laid out back to back from the
/// start of `buffer`
pub fn siblings(tag: u8, buffer: &[u8]) -> Siblings<'_> {
    Siblings {
        tag,
        remaining: buffer,
    }
}

/// Forward-only iterator returned by [`siblings`].
///
/// Unlike [`TlvElement::parse`] no bytes are skipped: iteration ends at the
/// first byte that is not the tag, at a truncated element, or at an element
/// shorter than [`MIN_ELEMENT_LEN`].
#[derive(Debug, Clone)]
pub struct Siblings<'a> {
    tag: u8,
    remaining: &'a [u8],
}

impl<'a> Siblings<'a> {
    /// Bytes not yet consumed by the iterator
    pub fn remaining(&self) -> &'a [u8] {
        self.remaining
    }
}

impl<'a> Iterator for Siblings<'a> {
    type Item = TlvElement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.first() != Some(&self.tag) {
            return None;
        }

        let length = element_length(self.remaining)?;
        if length < MIN_ELEMENT_LEN || length > self.remaining.len() {
            return None;
        }

        let (content, rest) = self.remaining.split_at(length);
        self.remaining = rest;
        Some(TlvElement {
            tag: self.tag,
            content,
        })
    }
}
