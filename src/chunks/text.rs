use super::{write_chunk, ChunkType, ParseableChunk, CHUNK_OVERHEAD};

/// A `tEXt` comment chunk built by the search.
///
/// The payload is written as given, without the keyword/NUL layout image
/// viewers expect, so it is only ever read back by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    text: Vec<u8>,
}
impl TextChunk {
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        Self { text: text.into() }
    }

    /// The candidate for search counter `attempt`.
    pub fn for_attempt(attempt: u64) -> Self {
        Self::new(format!("Hash attempt {attempt}"))
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        write_chunk(out, Self::HEADER, &self.text);
    }
}
impl<'a> ParseableChunk<'a> for TextChunk {
    type Output = Vec<u8>;

    const HEADER: &'static ChunkType = b"tEXt";

    fn from_bytes(chunk_data: &'a [u8]) -> nom::IResult<&'a [u8], Self> {
        Ok((&chunk_data[chunk_data.len()..], Self::new(chunk_data)))
    }

    fn to_bytes(&self) -> Self::Output {
        let mut bytes = Vec::with_capacity(self.text.len() + CHUNK_OVERHEAD);
        self.write_to(&mut bytes);
        bytes
    }
}
