// ============================================================================
// ERRORES - Taxonomía única de errores de la aplicación
// ============================================================================

/// Errores que atraviesan router, viewmodels y servicios
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Sin sesión, sesión ilegible o rol incorrecto para la ruta
    #[error("acceso denegado")]
    AuthDenied,
    #[error("ruta no encontrada: {0}")]
    RouteNotFound(String),
    /// Fallo de red o del store remoto (list/create/update)
    #[error("error de transporte: {0}")]
    Transport(String),
    /// Entrada de usuario rechazada (tipo de fichero no soportado, formulario incompleto)
    #[error("validación: {0}")]
    Validation(String),
    #[error("dom: {0}")]
    Dom(String),
    #[error("serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn missing_element(id: &str) -> Self {
        Self::Dom(format!("elemento #{} no encontrado", id))
    }
}
