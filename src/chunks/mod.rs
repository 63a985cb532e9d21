use nom::{
    bytes::complete::take, combinator::consumed, number::complete::be_u32, sequence::tuple,
    IResult,
};

use crate::{
    error::{Result, SpoofError},
    png::SIGNATURE,
};

mod crc;
pub mod iend;
pub mod text;

pub use iend::IENDChunk;
pub use text::TextChunk;

pub type ChunkType = [u8; 4];

pub const CHUNK_OVERHEAD: usize = 12;

/// The stored CRC is never checked; `as_bytes` is the exact source bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'a> {
    chunk_type: ChunkType,
    data: &'a [u8],
    raw: &'a [u8],
}

impl<'a> RawChunk<'a> {
    pub fn chunk_type(&self) -> &ChunkType {
        &self.chunk_type
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    pub fn is_end(&self) -> bool {
        &self.chunk_type == IENDChunk::HEADER
    }

    pub fn parse<T: ParseableChunk<'a>>(&self) -> Option<T> {
        if &self.chunk_type != T::HEADER {
            return None;
        }
        T::from_bytes(self.data).ok().map(|(_, chunk)| chunk)
    }
}

pub trait ParseableChunk<'a>: Sized {
    type Output: AsRef<[u8]>;
    const HEADER: &'static ChunkType;

    fn from_bytes(chunk_data: &'a [u8]) -> IResult<&'a [u8], Self>;
    fn to_bytes(&self) -> Self::Output;
}

pub fn encode_chunk(chunk_type: &ChunkType, data: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(data.len() + CHUNK_OVERHEAD);
    write_chunk(&mut bytes, chunk_type, data);
    bytes
}

pub(crate) fn write_chunk(out: &mut Vec<u8>, chunk_type: &ChunkType, data: &[u8]) {
    // Only synthesized tEXt/IEND data comes through here, far below 4 GiB.
    debug_assert!(u32::try_from(data.len()).is_ok());
    out.extend((data.len() as u32).to_be_bytes());
    out.extend(chunk_type);
    out.extend(data);
    out.extend(crc::chunk_crc(chunk_type, data).to_be_bytes());
}

pub fn decode_all(content: &[u8]) -> Result<Vec<RawChunk<'_>>> {
    if content.len() < SIGNATURE.len() {
        return Err(SpoofError::InvalidContainer);
    }
    iter_chunks(content)
        .filter(|chunk| !matches!(chunk, Ok(chunk) if chunk.is_end()))
        .collect()
}

pub fn iter_chunks(content: &[u8]) -> ChunkIter<'_> {
    ChunkIter {
        source: content.get(SIGNATURE.len()..).unwrap_or_default(),
        offset: SIGNATURE.len(),
        finished: false,
    }
}

pub struct ChunkIter<'a> {
    source: &'a [u8],
    offset: usize,
    finished: bool,
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = Result<RawChunk<'a>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.source.is_empty() {
            return None;
        }
        match parse_chunk(self.source) {
            Ok((rest, chunk)) => {
                log::debug!(
                    "{} chunk at byte {} with {} bytes of data",
                    String::from_utf8_lossy(&chunk.chunk_type),
                    self.offset,
                    chunk.data.len()
                );
                self.offset += chunk.raw.len();
                self.source = rest;
                Some(Ok(chunk))
            }
            Err(_) => {
                self.finished = true;
                Some(Err(SpoofError::MalformedContainer {
                    offset: self.offset,
                    remaining: self.source.len(),
                }))
            }
        }
    }
}

fn parse_chunk(input: &[u8]) -> IResult<&[u8], RawChunk<'_>> {
    let (rest, (raw, (chunk_type, data, _crc))) = consumed(chunk_fields)(input)?;
    Ok((
        rest,
        RawChunk {
            chunk_type,
            data,
            raw,
        },
    ))
}

fn chunk_fields(input: &[u8]) -> IResult<&[u8], (ChunkType, &[u8], u32)> {
    let (input, length) = be_u32(input)?;
    tuple((chunk_type, take(length as usize), be_u32))(input)
}

fn chunk_type(input: &[u8]) -> IResult<&[u8], ChunkType> {
    let (rest, bytes) = take(4usize)(input)?;
    let mut chunk_type = [0; 4];
    chunk_type.copy_from_slice(bytes);
    Ok((rest, chunk_type))
}
