// src/visitor/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const VISITOR_TOKEN_BYTES: usize = 32;

/// Fresh visitor token from the OS RNG.
pub fn generate_visitor_token() -> String {
    let mut rng = OsRng;
    generate_token(&mut rng, VISITOR_TOKEN_BYTES)
}

/// URL-safe base64 (no padding) of `nbytes` random bytes.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// SHA-256 of the token. This is what storage is keyed by.
pub fn hash_token(token: &str) -> [u8; 32] {
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&Sha256::digest(token.as_bytes()));
    arr
}

/// Tokens we issue are 43 URL-safe characters; anything else is ignored.
pub fn is_well_formed(token: &str) -> bool {
    (16..=128).contains(&token.len())
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
