// ============================================================================
// FORMAT - Presentación de fechas y estados para la lista de notas
// ============================================================================

use chrono::NaiveDate;

/// `2023-08-10` -> `August 10, 2023`
///
/// Si la fecha no se puede parsear se devuelve sin cambios.
pub fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(e) => {
            log::warn!("⚠️ [FORMAT] Fecha no formateable '{}': {}", raw, e);
            raw.to_string()
        }
    }
}

/// `pending` -> `Pending`; valores desconocidos se capitalizan
pub fn format_status(raw: &str) -> String {
    match raw {
        "pending" => "Pending".to_string(),
        "accepted" => "Accepted".to_string(),
        "refused" => "Refused".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
