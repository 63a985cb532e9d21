use nom::{bytes::complete::tag, IResult};

use crate::{
    chunks::{self, IENDChunk, ParseableChunk, RawChunk, TextChunk},
    error::{Result, SpoofError},
};

pub const SIGNATURE: [u8; 8] = *b"\x89PNG\x0d\x0a\x1a\x0a";

/// A decoded PNG held as its chunks, minus `IEND`.
///
/// Chunks borrow from the input and are never modified; output is built
/// by writing them back verbatim, then a comment chunk and a fresh `IEND`.
#[derive(Debug)]
pub struct Png<'a> {
    chunks: Vec<RawChunk<'a>>,
}

impl<'a> Png<'a> {
    pub fn decode(bytes: &'a [u8]) -> Result<Self> {
        parse_signature(bytes).map_err(|_| SpoofError::InvalidContainer)?;
        let chunks = chunks::decode_all(bytes)?;
        log::debug!("decoded {} chunks", chunks.len());
        Ok(Self { chunks })
    }

    pub fn chunks(&self) -> &[RawChunk<'a>] {
        &self.chunks
    }

    pub fn encode_with(&self, comment: &TextChunk) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.body_len() + comment.text().len() + 24);
        write_body(&mut bytes, &self.chunks);
        comment.write_to(&mut bytes);
        bytes.extend(IENDChunk.to_bytes());
        bytes
    }

    fn body_len(&self) -> usize {
        body_len(&self.chunks)
    }
}

/// Writes the signature followed by `chunks` exactly as they were read.
pub(crate) fn write_body(out: &mut Vec<u8>, chunks: &[RawChunk<'_>]) {
    out.extend(SIGNATURE);
    for chunk in chunks {
        out.extend(chunk.as_bytes());
    }
}

pub(crate) fn body_len(chunks: &[RawChunk<'_>]) -> usize {
    SIGNATURE.len()
        + chunks
            .iter()
            .map(|chunk| chunk.as_bytes().len())
            .sum::<usize>()
}

fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(SIGNATURE.as_slice())(input)
}
