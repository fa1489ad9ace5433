use argon2::{
    password_hash::{
        rand_core::{OsRng, RngCore},
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::config::HashingConfig;

/// Hash a password using Argon2id with the given cost parameters.
///
/// Every call draws a fresh salt from the OS RNG, so hashing the same
/// password twice yields different encoded strings.
pub fn hash(password: &str, cfg: &HashingConfig) -> Result<String, String> {
    let mut salt_bytes = vec![0u8; cfg.salt_length];
    OsRng.fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| format!("Invalid salt: {e}"))?;

    let params = Params::new(
        cfg.memory_kib,
        cfg.iterations,
        cfg.parallelism,
        Some(cfg.key_length),
    )
    .map_err(|e| format!("Invalid params: {e}"))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| format!("Hashing failed: {e}"))
}

/// Verify a password against an encoded hash. The cost parameters are read
/// back out of the hash string; digest comparison is constant-time.
pub fn verify(password: &str, hash: &str) -> Result<bool, String> {
    let parsed = PasswordHash::new(hash).map_err(|e| format!("Invalid hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
