use serde::{Deserialize, Serialize};

/// Rol del usuario conectado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Employee,
    Admin,
}

/// Sesión persistida bajo la clave `user` (la escribe el login)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub role: UserRole,
    #[serde(default)]
    pub email: String,
}

impl Session {
    pub fn new(role: UserRole, email: &str) -> Self {
        Self {
            role,
            email: email.to_string(),
        }
    }
}
