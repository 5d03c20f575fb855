/// Clave de localStorage donde el login guarda la sesión
pub const USER_STORAGE_KEY: &str = "user";

/// Clave de localStorage del token JWT del backend
pub const DEFAULT_JWT_STORAGE_KEY: &str = "jwt";

/// URL base del backend (configurable en compilación via BACKEND_URL)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5678",
};

/// Contenedor raíz donde el router monta cada vista
pub const ROOT_ID: &str = "root";

// Colores de las tarjetas del dashboard
pub const CARD_IDLE_BACKGROUND: &str = "#0D5AE5";
pub const CARD_ACTIVE_BACKGROUND: &str = "#2A2B35";

// Altura de la barra vertical según haya detalle abierto o no
pub const NAVBAR_HEIGHT_OPEN: &str = "150vh";
pub const NAVBAR_HEIGHT_CLOSED: &str = "120vh";

/// Rotación de la flecha de un bucket
pub const ARROW_EXPANDED: &str = "rotate(0deg)";
pub const ARROW_COLLAPSED: &str = "rotate(90deg)";

pub const ACTIVE_ICON_CLASS: &str = "active-icon";

/// Porcentaje por defecto de la TVA cuando el formulario lo deja vacío
pub const DEFAULT_PCT: f64 = 20.0;
