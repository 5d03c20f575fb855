use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Estado de revisión de una nota de gastos
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
    /// Valor desconocido recibido del backend, conservado tal cual
    Other(String),
}

impl BillStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
            BillStatus::Other(raw) => raw,
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => BillStatus::Pending,
            "accepted" => BillStatus::Accepted,
            "refused" => BillStatus::Refused,
            other => BillStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BillStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BillStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| BillStatus::parse(&s)).unwrap_or_default())
    }
}

/// Nota de gastos tal como la guarda el backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    /// Fecha ISO (`YYYY-MM-DD`), sin formatear
    pub date: String,
    #[serde(deserialize_with = "number_or_string")]
    pub amount: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub vat: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub pct: f64,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
    pub status: BillStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

impl Bill {
    /// Copia con la decisión del admin aplicada; el resto de campos no cambia
    pub fn with_decision(&self, status: BillStatus, comment: &str) -> Bill {
        Bill {
            status,
            comment_admin: Some(comment.to_string()),
            ..self.clone()
        }
    }
}

/// El backend guarda `vat`/`pct` a veces como texto ("70")
fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null,
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) if s.trim().is_empty() => Ok(0.0),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
        Raw::Null => Ok(0.0),
    }
}

/// Fila lista para la vista de empleado: nota original + fecha y estado formateados
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub bill: Bill,
    pub date: String,
    pub status: String,
}
