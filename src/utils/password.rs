use crate::config::{AppConfig, PasswordScheme};
use crate::errors::PortfolioError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 按配置的方案生成待存储的密码
pub fn encode_password(scheme: PasswordScheme, password: &str) -> Result<String, PortfolioError> {
    match scheme {
        PasswordScheme::Argon2 => hash_password(password),
        PasswordScheme::Plaintext => Ok(password.to_string()),
    }
}

/// 按配置的方案校验密码
pub fn check_password(scheme: PasswordScheme, password: &str, stored: &str) -> bool {
    match scheme {
        PasswordScheme::Argon2 => verify_password(password, stored),
        PasswordScheme::Plaintext => password == stored,
    }
}

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, PortfolioError> {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .map_err(|e| PortfolioError::validation(format!("Invalid Argon2 parameters: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PortfolioError::validation(format!("Password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码（参数从 PHC 字符串中读取）
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argon2_round_trip() {
        let stored = encode_password(PasswordScheme::Argon2, "s3cret").unwrap();
        assert!(stored.starts_with("$argon2id$"));
        assert!(check_password(PasswordScheme::Argon2, "s3cret", &stored));
        assert!(!check_password(PasswordScheme::Argon2, "wrong", &stored));
    }

    #[test]
    fn test_argon2_rejects_legacy_plaintext_rows() {
        assert!(!check_password(PasswordScheme::Argon2, "p", "p"));
    }

    #[test]
    fn test_plaintext_scheme() {
        let stored = encode_password(PasswordScheme::Plaintext, "p").unwrap();
        assert_eq!(stored, "p");
        assert!(check_password(PasswordScheme::Plaintext, "p", &stored));
        assert!(!check_password(PasswordScheme::Plaintext, "P", &stored));
    }
}
