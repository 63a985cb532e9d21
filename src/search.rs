use sha2::{Digest, Sha256};

use crate::{
    chunks::{IENDChunk, ParseableChunk, RawChunk, TextChunk},
    error::{Result, SpoofError},
    png::{body_len, write_body},
};

pub const DEFAULT_MAX_ATTEMPTS: u64 = 10_000_000;
const PROGRESS_INTERVAL: u64 = 100_000;
const MARKER: &str = "0x";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPrefix(String);

impl TargetPrefix {
    /// Lowercased to match the digest; not otherwise validated.
    pub fn parse(target: &str) -> Result<Self> {
        target
            .strip_prefix(MARKER)
            .map(|digits| Self(digits.to_ascii_lowercase()))
            .ok_or_else(|| SpoofError::InvalidTarget(target.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, digest: &str) -> bool {
        digest.starts_with(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub comment: TextChunk,
    pub attempts: u64,
    pub digest: String,
}

pub fn search(target: &TargetPrefix, chunks: &[RawChunk<'_>], max_attempts: u64) -> Result<Match> {
    let end = IENDChunk.to_bytes();
    let mut candidate = Vec::with_capacity(body_len(chunks) + 64);
    write_body(&mut candidate, chunks);
    let body = candidate.len();

    for attempt in 0..max_attempts {
        if attempt % PROGRESS_INTERVAL == 0 {
            log::info!("Attempt {attempt}/{max_attempts}...");
        }
        let comment = TextChunk::for_attempt(attempt);
        candidate.truncate(body);
        comment.write_to(&mut candidate);
        candidate.extend(end);

        let digest = format!("{:x}", Sha256::digest(&candidate));
        if target.matches(&digest) {
            log::info!("Found matching hash after {} attempts!", attempt + 1);
            return Ok(Match {
                comment,
                attempts: attempt + 1,
                digest,
            });
        }
    }
    Err(SpoofError::SearchExhausted {
        attempts: max_attempts,
    })
}
