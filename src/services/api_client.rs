// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP con el backend Billed (Stateless)
// ============================================================================
// GET /bills, POST /bills (multipart), PATCH /bills/{id}
// Token JWT leído de localStorage en cada request
// ============================================================================

use std::rc::Rc;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use crate::dom::FilePayload;
use crate::error::{AppError, AppResult};
use crate::models::Bill;
use crate::services::store::{BillsApi, CreateBillArgs, CreatedFile, Store, UpdateBillArgs};
use crate::utils::SessionStorage;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    jwt_key: String,
    storage: Rc<dyn SessionStorage>,
}

impl ApiClient {
    pub fn new(base_url: &str, jwt_key: &str, storage: Rc<dyn SessionStorage>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            jwt_key: jwt_key.to_string(),
            storage,
        }
    }

    fn authorization(&self) -> Option<String> {
        self.storage
            .get_item(&self.jwt_key)
            .filter(|jwt| !jwt.is_empty())
            .map(|jwt| format!("Bearer {}", jwt))
    }

    async fn check(response: Response) -> AppResult<Response> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        Err(AppError::transport(format!("HTTP {}: {}", status, error_text)))
    }
}

#[async_trait(?Send)]
impl BillsApi for ApiClient {
    async fn list(&self) -> AppResult<Vec<Bill>> {
        let url = format!("{}/bills", self.base_url);
        let mut request = Request::get(&url);
        if let Some(auth) = self.authorization() {
            request = request.header("Authorization", &auth);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::transport(format!("Network error: {}", e)))?;
        let bills = Self::check(response)
            .await?
            .json::<Vec<Bill>>()
            .await
            .map_err(|e| AppError::transport(format!("Parse error: {}", e)))?;

        log::info!("📋 [STORE] {} notas recibidas", bills.len());
        Ok(bills)
    }

    async fn create(&self, args: CreateBillArgs) -> AppResult<CreatedFile> {
        let url = format!("{}/bills", self.base_url);
        let form = web_sys::FormData::new().map_err(|e| AppError::Dom(format!("{:?}", e)))?;

        match &args.file.payload {
            FilePayload::Browser(file) => form.append_with_blob_and_filename("file", file, &args.file.name),
            FilePayload::Bytes(bytes) => {
                let array = js_sys::Uint8Array::from(bytes.as_slice());
                let parts = js_sys::Array::of1(&array);
                let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
                    .map_err(|e| AppError::Dom(format!("{:?}", e)))?;
                form.append_with_blob_and_filename("file", &blob, &args.file.name)
            }
        }
        .map_err(|e| AppError::Dom(format!("{:?}", e)))?;
        form.append_with_str("email", &args.email)
            .map_err(|e| AppError::Dom(format!("{:?}", e)))?;

        // Sin Content-Type: el navegador pone el boundary del multipart
        let mut request = Request::post(&url);
        if let Some(auth) = self.authorization() {
            request = request.header("Authorization", &auth);
        }

        log::info!("📤 [STORE] Subiendo justificativo {}", args.file.name);

        let response = request
            .body(form)
            .map_err(|e| AppError::transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::transport(format!("Network error: {}", e)))?;

        Self::check(response)
            .await?
            .json::<CreatedFile>()
            .await
            .map_err(|e| AppError::transport(format!("Parse error: {}", e)))
    }

    async fn update(&self, args: UpdateBillArgs) -> AppResult<Bill> {
        let url = format!("{}/bills/{}", self.base_url, args.selector);
        let mut request = Request::patch(&url).header("Content-Type", "application/json");
        if let Some(auth) = self.authorization() {
            request = request.header("Authorization", &auth);
        }

        let response = request
            .body(args.data)
            .map_err(|e| AppError::transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::transport(format!("Network error: {}", e)))?;

        Self::check(response)
            .await?
            .json::<Bill>()
            .await
            .map_err(|e| AppError::transport(format!("Parse error: {}", e)))
    }
}

impl Store for ApiClient {
    fn bills(&self) -> &dyn BillsApi {
        self
    }
}
