//! Session identifier generation

use rand::RngCore;

pub const SESSION_ID_BYTES: usize = 24;

/// Random, URL-safe session id (hex of 24 bytes from the thread RNG).
pub fn generate_session_id() -> String {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

pub fn is_valid_session_id(id: &str) -> bool {
    id.len() == SESSION_ID_BYTES * 2 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_valid_and_distinct() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert!(is_valid_session_id(&a));
        assert!(is_valid_session_id(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_malformed_ids() {
        assert!(!is_valid_session_id(""));
        assert!(!is_valid_session_id("abc"));
        assert!(!is_valid_session_id(&"z".repeat(SESSION_ID_BYTES * 2)));
    }
}
