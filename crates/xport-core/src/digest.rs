use sha2::{Digest, Sha256};

pub fn content_digest_hex(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!("{digest:x}")
}

#[cfg(test)]
#[path = "digest_test.rs"]
mod tests;
