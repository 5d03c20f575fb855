// ============================================================================
// NEW BILL VIEWMODEL - Alta de una nota de gastos
// ============================================================================
// Dos pasos: al elegir el fichero se valida y se sube (el backend crea la nota
// y devuelve su id); al enviar el formulario se completa esa nota con los
// campos del formulario.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use crate::dom::{EventKind, HandlerRegistry};
use crate::error::{AppError, AppResult};
use crate::models::{Bill, BillStatus};
use crate::router::{Navigate, Route};
use crate::services::{update_bill, upload_receipt};
use crate::state::AppState;
use crate::utils::file_types;
use crate::utils::DEFAULT_PCT;
use crate::viewmodels::{LogoutViewModel, MountedView};
use crate::views::new_bill::{
    AMOUNT_ID, COMMENTARY_ID, DATE_ID, EXPENSE_NAME_ID, EXPENSE_TYPE_ID, FILE_INPUT_ID, FORM_ID, PCT_ID, VAT_ID,
};

const INVALID_FILE_MESSAGE: &str = "Seuls les fichiers jpg, jpeg et png sont acceptés";
const MISSING_FILE_MESSAGE: &str = "Veuillez joindre un justificatif";

/// Justificativo ya subido, pendiente de completar con el formulario
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub bill_id: String,
    pub file_url: String,
    pub file_name: String,
}

pub struct NewBillViewModel {
    state: AppState,
    on_navigate: Navigate,
    registry: HandlerRegistry,
    staged: RefCell<Option<StagedFile>>,
    mounted: Cell<bool>,
    this: Weak<NewBillViewModel>,
}

impl NewBillViewModel {
    pub fn new(state: AppState, on_navigate: Navigate) -> Rc<Self> {
        let registry = HandlerRegistry::new(state.document.clone());
        let vm = Rc::new_cyclic(|this| Self {
            state,
            on_navigate,
            registry,
            staged: RefCell::new(None),
            mounted: Cell::new(true),
            this: this.clone(),
        });

        let this = vm.this.clone();
        vm.registry.rebind(
            FILE_INPUT_ID,
            EventKind::Change,
            Rc::new(move || {
                let Some(vm) = this.upgrade() else {
                    return;
                };
                let task_vm = vm.clone();
                vm.state.spawn(async move {
                    let _ = task_vm.handle_change_file().await;
                });
            }),
        );

        let this = vm.this.clone();
        vm.registry.rebind(
            FORM_ID,
            EventKind::Submit,
            Rc::new(move || {
                let Some(vm) = this.upgrade() else {
                    return;
                };
                let task_vm = vm.clone();
                vm.state.spawn(async move {
                    let _ = task_vm.handle_submit().await;
                });
            }),
        );

        LogoutViewModel::bind(&vm.state, &vm.registry, vm.on_navigate.clone());
        vm
    }

    pub fn staged_file(&self) -> Option<StagedFile> {
        self.staged.borrow().clone()
    }

    fn session_email(&self) -> String {
        self.state.auth().current_user().map(|s| s.email).unwrap_or_default()
    }

    /// Valida el fichero elegido y lo sube; un tipo no admitido limpia el input
    pub async fn handle_change_file(&self) -> AppResult<StagedFile> {
        let document = self.state.document.clone();
        let Some(file) = document.selected_file(FILE_INPUT_ID) else {
            *self.staged.borrow_mut() = None;
            return Err(AppError::Validation("aucun fichier sélectionné".to_string()));
        };

        if !file_types::is_allowed(&file.name, &file.content_type) {
            log::warn!("⚠️ [NEW-BILL] Fichero rechazado: {} ({})", file.name, file.content_type);
            *self.staged.borrow_mut() = None;
            document.clear_file_input(FILE_INPUT_ID);
            document.alert(INVALID_FILE_MESSAGE);
            return Err(AppError::Validation(format!("type de fichier non supporté: {}", file.name)));
        }

        let Some(store) = self.state.store.clone() else {
            return Err(AppError::transport("store no disponible"));
        };

        let file_name = file.name.clone();
        let created = upload_receipt(store.as_ref(), &self.session_email(), file)
            .await
            .map_err(|e| {
                log::error!("❌ [NEW-BILL] Error subiendo {}: {}", file_name, e);
                e
            })?;

        let staged = StagedFile {
            bill_id: created.key,
            file_url: created.file_url,
            file_name,
        };
        log::info!("📎 [NEW-BILL] Justificativo subido, nota {}", staged.bill_id);
        *self.staged.borrow_mut() = Some(staged.clone());
        Ok(staged)
    }

    /// Nota pendiente construida con los valores actuales del formulario
    pub fn bill_from_form(&self, staged: &StagedFile) -> Bill {
        let document = &self.state.document;
        let field = |id: &str| document.value(id).unwrap_or_default();

        let pct = parse_number(&field(PCT_ID)).trunc();
        Bill {
            id: staged.bill_id.clone(),
            email: self.session_email(),
            expense_type: field(EXPENSE_TYPE_ID),
            name: field(EXPENSE_NAME_ID),
            date: field(DATE_ID),
            amount: parse_number(&field(AMOUNT_ID)).trunc(),
            vat: parse_number(&field(VAT_ID)),
            pct: if pct == 0.0 { DEFAULT_PCT } else { pct },
            commentary: field(COMMENTARY_ID),
            file_url: staged.file_url.clone(),
            file_name: staged.file_name.clone(),
            status: BillStatus::Pending,
            comment_admin: None,
        }
    }

    /// Completa la nota creada al subir el fichero y vuelve a la lista.
    /// Si el guardado falla se avisa y el formulario se queda como estaba.
    pub async fn handle_submit(&self) -> AppResult<Bill> {
        let Some(staged) = self.staged_file() else {
            self.state.document.alert(MISSING_FILE_MESSAGE);
            return Err(AppError::Validation("aucun justificatif".to_string()));
        };
        let Some(store) = self.state.store.clone() else {
            return Err(AppError::transport("store no disponible"));
        };

        let bill = self.bill_from_form(&staged);
        match update_bill(store.as_ref(), &bill, &staged.bill_id).await {
            Ok(saved) => {
                log::info!("✅ [NEW-BILL] Nota {} enviada", staged.bill_id);
                if self.mounted.get() {
                    (self.on_navigate)(Route::Bills.path());
                }
                Ok(saved)
            }
            Err(e) => {
                log::error!("❌ [NEW-BILL] Error enviando la nota {}: {}", staged.bill_id, e);
                if self.mounted.get() {
                    self.state.document.alert(&e.to_string());
                }
                Err(e)
            }
        }
    }
}

impl MountedView for NewBillViewModel {
    fn unmount(&self) {
        self.mounted.set(false);
        self.registry.clear();
    }
}

/// Campo numérico del formulario; vacío o ilegible cuenta como 0
fn parse_number(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, SelectedFile};
    use crate::models::UserRole;
    use crate::testing::TestHost;
    use crate::utils::ROOT_ID;
    use crate::views::render_new_bill;

    fn mounted_host() -> (TestHost, Rc<NewBillViewModel>) {
        let host = TestHost::new(vec![]);
        host.login_as(UserRole::Employee, "employee@test.tld");
        host.document.set_inner_html(ROOT_ID, &render_new_bill()).unwrap();
        let vm = NewBillViewModel::new(host.state.clone(), host.navigation_recorder());
        (host, vm)
    }

    fn choose(host: &TestHost, name: &str, mime: &str) {
        host.document
            .set_file(FILE_INPUT_ID, SelectedFile::from_bytes(name, mime, vec![1, 2, 3]))
            .unwrap();
        host.document.dispatch(FILE_INPUT_ID, EventKind::Change);
        host.settle();
    }

    #[test]
    fn pdf_is_rejected_and_input_cleared() {
        let (host, vm) = mounted_host();
        choose(&host, "test.pdf", "application/pdf");

        assert_eq!(vm.staged_file(), None);
        assert_eq!(host.document.alerts().len(), 1);
        assert!(host.document.selected_file(FILE_INPUT_ID).is_none());
        assert_eq!(host.document.value(FILE_INPUT_ID).as_deref(), Some(""));
        assert!(host.store.uploads().is_empty());
    }

    #[test]
    fn png_is_uploaded_and_staged() {
        let (host, vm) = mounted_host();
        choose(&host, "test.png", "image/png");

        let staged = vm.staged_file().unwrap();
        assert_eq!(staged.file_name, "test.png");
        assert_eq!(staged.bill_id, "created-1");
        assert!(host.document.alerts().is_empty());
        assert_eq!(
            host.store.uploads(),
            vec![("employee@test.tld".to_string(), "test.png".to_string())]
        );
    }

    #[test]
    fn rejected_file_after_accepted_one_drops_staging() {
        let (host, vm) = mounted_host();
        choose(&host, "test.png", "image/png");
        choose(&host, "test.gif", "image/gif");
        assert_eq!(vm.staged_file(), None);
    }

    #[test]
    fn upload_failure_leaves_nothing_staged() {
        let (host, vm) = mounted_host();
        host.store.fail_create("500");
        choose(&host, "test.jpg", "image/jpeg");
        assert_eq!(vm.staged_file(), None);
    }

    #[test]
    fn submit_without_file_is_rejected() {
        let (host, _vm) = mounted_host();
        host.document.dispatch(FORM_ID, EventKind::Submit);
        host.settle();

        assert!(host.store.updates().is_empty());
        assert_eq!(host.document.alerts(), vec![MISSING_FILE_MESSAGE.to_string()]);
        assert!(host.navigations().is_empty());
    }

    #[test]
    fn submit_completes_staged_bill_and_navigates() {
        let (host, _vm) = mounted_host();
        choose(&host, "receipt.jpg", "image/jpeg");
        host.document.set_value(EXPENSE_TYPE_ID, "Transports").unwrap();
        host.document.set_value(EXPENSE_NAME_ID, "Vol Paris Londres").unwrap();
        host.document.set_value(DATE_ID, "2023-08-10").unwrap();
        host.document.set_value(AMOUNT_ID, "348").unwrap();
        host.document.set_value(VAT_ID, "70").unwrap();
        host.document.set_value(COMMENTARY_ID, "séminaire").unwrap();

        host.document.dispatch(FORM_ID, EventKind::Submit);
        host.settle();

        let updates = host.store.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].selector, "created-1");
        let sent: Bill = serde_json::from_str(&updates[0].data).unwrap();
        assert_eq!(sent.status, BillStatus::Pending);
        assert_eq!(sent.email, "employee@test.tld");
        assert_eq!(sent.amount, 348.0);
        assert_eq!(sent.pct, DEFAULT_PCT);
        assert_eq!(sent.file_name, "receipt.jpg");
        assert_eq!(host.navigations(), vec![Route::Bills.path().to_string()]);
    }

    #[test]
    fn failed_submit_stays_on_form() {
        let (host, _vm) = mounted_host();
        choose(&host, "receipt.png", "image/png");
        host.store.fail_update("503");

        host.document.dispatch(FORM_ID, EventKind::Submit);
        host.settle();

        assert!(host.navigations().is_empty());
        assert_eq!(host.document.alerts().len(), 1);
    }

    #[test]
    fn numeric_fields_tolerate_garbage() {
        assert_eq!(parse_number(" 12,5 "), 12.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
    }
}
