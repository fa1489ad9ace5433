use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub hashing: HashingConfig,
}

/// Argon2id cost parameters applied when deriving a new password hash.
///
/// Verification reads its parameters back out of the stored encoded hash,
/// so changing these only affects hashes created afterwards.
#[derive(Debug, Clone)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
    pub salt_length: usize,
    pub key_length: usize,
}

impl Default for HashingConfig {
    fn default() -> Self {
        HashingConfig {
            memory_kib: 46 * 1024, // 46 MiB
            iterations: 1,
            parallelism: 1,
            salt_length: 16,
            key_length: 16,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("ACCOUNTD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid ACCOUNTD_HOST: {e}"))?;

        let port: u16 = env_or("ACCOUNTD_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid ACCOUNTD_PORT: {e}"))?;

        let log_level = env_or("ACCOUNTD_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            log_level,
            hashing: HashingConfig::default(),
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
