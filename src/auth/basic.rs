// src/auth/basic.rs
use crate::config::Credentials;
use crate::errors::ServerError;
use astra::Request;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Parse `Authorization: Basic <base64(user:pass)>`.
pub fn parse_basic_auth(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (user, pass) = text.split_once(':')?;

    Some((user.to_string(), pass.to_string()))
}

/// Hash a secret using SHA-256 so comparisons run over fixed-length input.
pub fn hash_secret(secret: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}

/// Constant-time-ish compare for hashes.
pub fn hashes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Ok when the request carries the configured credentials. With no
/// credentials configured nobody gets in.
pub fn require_basic_auth(req: &Request, expected: Option<&Credentials>) -> Result<(), ServerError> {
    let expected = expected.ok_or(ServerError::Unauthorized)?;

    let (user, pass) = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(parse_basic_auth)
        .ok_or(ServerError::Unauthorized)?;

    // Evaluate both so a wrong user costs the same as a wrong password.
    let user_ok = hashes_equal(&hash_secret(&user), &hash_secret(&expected.user));
    let pass_ok = hashes_equal(&hash_secret(&pass), &hash_secret(&expected.pass));

    if user_ok & pass_ok {
        Ok(())
    } else {
        Err(ServerError::Unauthorized)
    }
}
