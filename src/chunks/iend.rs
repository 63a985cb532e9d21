use super::{crc::chunk_crc, ChunkType, ParseableChunk};

pub struct IENDChunk;
impl<'a> ParseableChunk<'a> for IENDChunk {
    type Output = [u8; 12];

    const HEADER: &'static ChunkType = b"IEND";

    fn from_bytes(chunk_data: &'a [u8]) -> nom::IResult<&'a [u8], Self> {
        Ok((chunk_data, Self))
    }

    fn to_bytes(&self) -> Self::Output {
        let mut bytes = [0; 12];
        bytes[4..8].copy_from_slice(Self::HEADER);
        bytes[8..].copy_from_slice(&chunk_crc(Self::HEADER, &[]).to_be_bytes());
        bytes
    }
}
