// ABOUTME: Shared utility functions for prdkit
// ABOUTME: Opaque record identifier generation

use rand::Rng;

const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of generated record identifiers
pub const RECORD_ID_LEN: usize = 12;

/// Generate an opaque alphanumeric record identifier
pub fn generate_record_id() -> String {
    let mut rng = rand::thread_rng();
    (0..RECORD_ID_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
