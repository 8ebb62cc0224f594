use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    MD5,
    SHA3,
    SHA256,
    BLAKE2B,
    BLAKE2S,
    BLAKE3,
}

/// How two same-named files are judged equal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonMode {
    // Matching kind, size and modify time counts as equal, otherwise compare bytes
    Shallow,
    // Always compare bytes
    #[default]
    Content,
    // Compare digests
    Checksum(HashType),
}
