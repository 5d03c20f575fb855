use crate::models::Bill;

/// Contexto de ejecución inyectado: qué notas debe ocultar el dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    pub current_user_email: Option<String>,
    pub excluded_emails: Vec<String>,
}

impl Environment {
    /// Las cuentas de prueba y las notas del propio admin no se revisan
    pub fn is_visible(&self, bill: &Bill) -> bool {
        if self.excluded_emails.iter().any(|e| e == &bill.email) {
            return false;
        }
        match &self.current_user_email {
            Some(email) => email != &bill.email,
            None => true,
        }
    }
}
