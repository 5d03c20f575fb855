// ============================================================================
// STORE - Frontera con la persistencia remota de notas
// ============================================================================
// El núcleo solo usa bills().list/create/update; nada más del backend.
// ============================================================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::dom::SelectedFile;
use crate::error::AppResult;
use crate::models::Bill;

/// Subida del justificativo de una nota nueva
#[derive(Debug, Clone)]
pub struct CreateBillArgs {
    pub email: String,
    pub file: SelectedFile,
}

/// Respuesta del backend tras subir el fichero: URL pública + id de la nota creada
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFile {
    pub file_url: String,
    pub key: String,
}

/// `data` es la nota completa serializada; `selector` su id
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBillArgs {
    pub data: String,
    pub selector: String,
}

#[async_trait(?Send)]
pub trait BillsApi {
    async fn list(&self) -> AppResult<Vec<Bill>>;
    async fn create(&self, args: CreateBillArgs) -> AppResult<CreatedFile>;
    async fn update(&self, args: UpdateBillArgs) -> AppResult<Bill>;
}

pub trait Store {
    fn bills(&self) -> &dyn BillsApi;
}
