//! Operator session gate.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_username() -> String {
    "admin".to_string()
}
fn default_password() -> String {
    "admin123".to_string()
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

/// Proof that the operator logged in; handed to every command that touches
/// the register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    operator: String,
}

impl Session {
    pub fn login(expected: &Credentials, username: &str, password: &str) -> AppResult<Self> {
        if username == expected.username && password == expected.password {
            Ok(Self {
                operator: username.to_string(),
            })
        } else {
            Err(AppError::AccessDenied)
        }
    }

    /// Same as [`Session::login`] but with possibly absent credentials.
    pub fn from_args(
        expected: &Credentials,
        username: Option<&str>,
        password: Option<&str>,
    ) -> AppResult<Self> {
        match (username, password) {
            (Some(u), Some(p)) => Self::login(expected, u, p),
            _ => Err(AppError::AccessDenied),
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }
}
