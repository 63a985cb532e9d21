use std::fmt;

pub type Result<T> = std::result::Result<T, SpoofError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpoofError {
    /// The input doesn't start with the PNG signature.
    InvalidContainer,
    /// A chunk at `offset` declares more bytes than the `remaining` input holds.
    MalformedContainer { offset: usize, remaining: usize },
    /// None of the first `attempts` candidates produced the target prefix.
    SearchExhausted { attempts: u64 },
    /// The target is missing its `0x` marker.
    InvalidTarget(String),
}

impl fmt::Display for SpoofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContainer => write!(f, "input doesn't start with the PNG signature"),
            Self::MalformedContainer { offset, remaining } => write!(
                f,
                "chunk at byte {offset} runs past the end of the file ({remaining} bytes left)"
            ),
            Self::SearchExhausted { attempts } => {
                write!(f, "could not find a matching hash after {attempts} attempts")
            }
            Self::InvalidTarget(target) => {
                write!(f, "target hex must start with \"0x\", got {target:?}")
            }
        }
    }
}

impl std::error::Error for SpoofError {}
