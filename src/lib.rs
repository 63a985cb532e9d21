pub mod batch;
pub mod chunks;
mod error;
mod png;
mod search;

pub use error::{Result, SpoofError};
pub use png::{Png, SIGNATURE};
pub use search::{search, Match, TargetPrefix, DEFAULT_MAX_ATTEMPTS};

/// A spoofed file together with how it was found.
#[derive(Debug)]
pub struct Spoofed {
    pub bytes: Vec<u8>,
    pub digest: String,
    pub attempts: u64,
}

/// Appends a comment chunk to the PNG in `input` so the SHA-256 of the
/// result starts with `target`, giving up after the default number of
/// attempts.
pub fn spoof(target: &TargetPrefix, input: &[u8]) -> Result<Vec<u8>> {
    spoof_with_limit(target, input, DEFAULT_MAX_ATTEMPTS).map(|spoofed| spoofed.bytes)
}

pub fn spoof_with_limit(
    target: &TargetPrefix,
    input: &[u8],
    max_attempts: u64,
) -> Result<Spoofed> {
    let png = Png::decode(input)?;
    let found = search(target, png.chunks(), max_attempts)?;
    Ok(Spoofed {
        bytes: png.encode_with(&found.comment),
        digest: found.digest,
        attempts: found.attempts,
    })
}
