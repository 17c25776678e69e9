use argon2::Params;
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or_default};

use crate::error::{AuthError, AuthResult};

pub const DEFAULT_SEED_EMAIL: &str = "manager@inventory.local";

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl HashingConfig {
    pub fn params(&self) -> AuthResult<Params> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl FromEnv for HashingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            memory_kib: env_parse_or_default("ARGON2_MEMORY_KIB", &defaults.memory_kib.to_string())?,
            iterations: env_parse_or_default("ARGON2_ITERATIONS", &defaults.iterations.to_string())?,
            parallelism: env_parse_or_default(
                "ARGON2_PARALLELISM",
                &defaults.parallelism.to_string(),
            )?,
        })
    }
}

/// Credentials for the manager created on first start
#[derive(Clone)]
pub struct SeedConfig {
    pub email: String,
    /// `None` disables seeding
    pub password: Option<String>,
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl FromEnv for SeedConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            email: env_or_default("SEED_MANAGER_EMAIL", DEFAULT_SEED_EMAIL),
            password: std::env::var("SEED_MANAGER_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashing_defaults_match_argon2() {
        temp_env::with_vars_unset(
            ["ARGON2_MEMORY_KIB", "ARGON2_ITERATIONS", "ARGON2_PARALLELISM"],
            || {
                let config = HashingConfig::from_env().unwrap();
                assert_eq!(config, HashingConfig::default());
                assert_eq!(config.params().unwrap(), Params::default());
            },
        );
    }

    #[test]
    fn test_hashing_from_env() {
        temp_env::with_vars(
            [
                ("ARGON2_MEMORY_KIB", Some("8192")),
                ("ARGON2_ITERATIONS", Some("3")),
                ("ARGON2_PARALLELISM", Some("2")),
            ],
            || {
                let params = HashingConfig::from_env().unwrap().params().unwrap();
                assert_eq!(params.m_cost(), 8192);
                assert_eq!(params.t_cost(), 3);
                assert_eq!(params.p_cost(), 2);
            },
        );
    }

    #[test]
    fn test_out_of_range_params_rejected() {
        let config = HashingConfig {
            memory_kib: 1,
            iterations: 1,
            parallelism: 1,
        };
        assert!(matches!(config.params(), Err(AuthError::Hashing(_))));
    }

    #[test]
    fn test_seed_defaults() {
        temp_env::with_vars_unset(["SEED_MANAGER_EMAIL", "SEED_MANAGER_PASSWORD"], || {
            let config = SeedConfig::from_env().unwrap();
            assert_eq!(config.email, DEFAULT_SEED_EMAIL);
            assert!(config.password.is_none());
        });
    }

    #[test]
    fn test_seed_password_redacted_in_debug() {
        temp_env::with_vars(
            [
                ("SEED_MANAGER_EMAIL", Some("owner@shop.test")),
                ("SEED_MANAGER_PASSWORD", Some("sekrit-pass")),
            ],
            || {
                let config = SeedConfig::from_env().unwrap();
                assert_eq!(config.email, "owner@shop.test");
                assert_eq!(config.password.as_deref(), Some("sekrit-pass"));
                assert!(!format!("{:?}", config).contains("sekrit-pass"));
            },
        );
    }
}
