use std::sync::OnceLock;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::{error, warn};

static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Salted one-way digest with argon2 default cost parameters. Fails only
/// on resource exhaustion; callers map that to a 500.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

/// A malformed stored hash and a wrong password both come back `false`:
/// callers must not be able to tell the two apart.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "stored password hash is malformed");
            return false;
        }
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

/// Burns the same argon2 cost as a real check when no stored hash is
/// available, so login latency does not reveal whether an email exists.
/// The result is always discarded; callers fail with the same 401.
pub fn verify_dummy(plain: &str) {
    let hash = DUMMY_HASH
        .get_or_init(|| hash_password("dummy-password").unwrap_or_default());
    let _ = verify_password(plain, hash);
}
