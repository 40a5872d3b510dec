use sha2::{Digest, Sha256};

/// SHA256 of raw source text, used to pin the inputs a report was built from.
pub fn text_digest(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}
