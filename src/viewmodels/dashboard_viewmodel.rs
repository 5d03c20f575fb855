// ============================================================================
// DASHBOARD VIEWMODEL - Revisión de tickets por el administrador
// ============================================================================
// Tres buckets plegables (pending/accepted/refused) y un panel de detalle con
// un único ticket abierto. Cada render de un bucket reemplaza sus tarjetas, así
// que después de cada render se re-enlazan los clicks de TODOS los tickets a
// través del HandlerRegistry (quita el listener previo antes de poner el nuevo).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use crate::dom::{EventKind, Handler, HandlerRegistry};
use crate::error::{AppError, AppResult};
use crate::models::{Bill, BillStatus};
use crate::router::{Navigate, Route};
use crate::services::{list_all_bills, persist_status};
use crate::state::{AppState, BucketTransition, DashboardViewState, Environment, StatusBucket, TicketTransition};
use crate::utils::html::escape;
use crate::utils::{
    ARROW_COLLAPSED, ARROW_EXPANDED, CARD_ACTIVE_BACKGROUND, CARD_IDLE_BACKGROUND, NAVBAR_HEIGHT_CLOSED,
    NAVBAR_HEIGHT_OPEN,
};
use crate::viewmodels::{LogoutViewModel, MountedView};
use crate::views::dashboard::{arrow_icon_id, bucket_container_id, ticket_card_id, ADMIN_FILE_MODAL_ID, DETAIL_PANE_ID};
use crate::views::dashboard_form::{ACCEPT_BUTTON_ID, COMMENT_ID, EYE_ICON_ID, REFUSE_BUTTON_ID};
use crate::views::layout::NAVBAR_ID;
use crate::views::{cards, filtered_bills, render_big_billed_icon, render_dashboard_form};

pub struct DashboardViewModel {
    state: AppState,
    on_navigate: Navigate,
    /// Copia de solo lectura; nunca se modifica localmente tras una decisión
    bills: Vec<Bill>,
    environment: Environment,
    view: RefCell<DashboardViewState>,
    registry: HandlerRegistry,
    mounted: Cell<bool>,
    this: Weak<DashboardViewModel>,
}

impl DashboardViewModel {
    /// Monta el viewmodel sobre un dashboard ya renderizado
    pub fn new(state: AppState, on_navigate: Navigate, bills: Vec<Bill>) -> Rc<Self> {
        let environment = state.environment();
        let registry = HandlerRegistry::new(state.document.clone());
        let vm = Rc::new_cyclic(|this| Self {
            state,
            on_navigate,
            bills,
            environment,
            view: RefCell::new(DashboardViewState::new()),
            registry,
            mounted: Cell::new(true),
            this: this.clone(),
        });

        for bucket in StatusBucket::ALL {
            vm.registry.rebind(&arrow_icon_id(bucket), EventKind::Click, vm.bucket_handler(bucket));
        }
        vm.bind_ticket_cards();
        LogoutViewModel::bind(&vm.state, &vm.registry, vm.on_navigate.clone());

        log::info!("👑 [DASHBOARD] Montado con {} notas", vm.bills.len());
        vm
    }

    /// Todas las notas del store; los errores se propagan al llamador
    pub async fn list_all_bills(state: &AppState) -> AppResult<Vec<Bill>> {
        match &state.store {
            Some(store) => list_all_bills(store.as_ref()).await,
            None => {
                log::warn!("⚠️ [DASHBOARD] Sin store, dashboard vacío");
                Ok(Vec::new())
            }
        }
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn view_state(&self) -> DashboardViewState {
        self.view.borrow().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    fn find_bill(&self, bill_id: &str) -> AppResult<&Bill> {
        self.bills
            .iter()
            .find(|b| b.id == bill_id)
            .ok_or_else(|| AppError::Validation(format!("ticket desconocido: {}", bill_id)))
    }

    pub fn toggle_bucket(&self, bucket: StatusBucket) -> AppResult<BucketTransition> {
        let transition = self.view.borrow_mut().toggle_bucket(bucket);
        let document = &self.state.document;
        let container = bucket_container_id(bucket);

        match transition {
            BucketTransition::Expanded => {
                document.set_style(&arrow_icon_id(bucket), "transform", ARROW_EXPANDED)?;
                let visible = filtered_bills(&self.bills, &bucket.status(), &self.environment);
                document.set_inner_html(&container, &cards(&visible))?;
                log::debug!("📂 [DASHBOARD] Bucket {} abierto ({} tickets)", bucket.index(), visible.len());
            }
            BucketTransition::Collapsed => {
                document.set_style(&arrow_icon_id(bucket), "transform", ARROW_COLLAPSED)?;
                document.set_inner_html(&container, "")?;
                log::debug!("📁 [DASHBOARD] Bucket {} cerrado", bucket.index());
            }
        }

        self.bind_ticket_cards();
        Ok(transition)
    }

    /// Abre el detalle del ticket; el mismo ticket dos veces vuelve al icono neutro
    pub fn open_ticket(&self, bill_id: &str) -> AppResult<TicketTransition> {
        let bill = self.find_bill(bill_id)?.clone();
        let transition = self.view.borrow_mut().select_ticket(bill_id);
        let document = &self.state.document;
        let card_id = ticket_card_id(bill_id);

        match transition {
            TicketTransition::Opened => {
                for other in &self.bills {
                    let other_id = ticket_card_id(&other.id);
                    if document.exists(&other_id) {
                        document.set_style(&other_id, "background", CARD_IDLE_BACKGROUND)?;
                    }
                }
                if document.exists(&card_id) {
                    document.set_style(&card_id, "background", CARD_ACTIVE_BACKGROUND)?;
                }
                document.set_inner_html(DETAIL_PANE_ID, &render_dashboard_form(&bill))?;
                document.set_style(NAVBAR_ID, "height", NAVBAR_HEIGHT_OPEN)?;
                log::info!("🎫 [DASHBOARD] Ticket {} abierto", bill_id);
            }
            TicketTransition::Closed => {
                if document.exists(&card_id) {
                    document.set_style(&card_id, "background", CARD_IDLE_BACKGROUND)?;
                }
                document.set_inner_html(DETAIL_PANE_ID, &render_big_billed_icon())?;
                document.set_style(NAVBAR_ID, "height", NAVBAR_HEIGHT_CLOSED)?;
                log::info!("🎫 [DASHBOARD] Ticket {} cerrado", bill_id);
            }
        }

        self.bind_detail_form(&bill);
        Ok(transition)
    }

    pub async fn accept_ticket(&self, bill_id: &str, comment: &str) -> AppResult<Bill> {
        self.decide(bill_id, BillStatus::Accepted, comment).await
    }

    pub async fn refuse_ticket(&self, bill_id: &str, comment: &str) -> AppResult<Bill> {
        self.decide(bill_id, BillStatus::Refused, comment).await
    }

    /// Persiste la decisión y vuelve al dashboard para re-leer la lista remota.
    /// Un fallo se registra y se devuelve; la navegación ocurre igualmente.
    async fn decide(&self, bill_id: &str, status: BillStatus, comment: &str) -> AppResult<Bill> {
        let updated = self.find_bill(bill_id)?.with_decision(status, comment);

        let result = match &self.state.store {
            Some(store) => persist_status(store.as_ref(), &updated).await,
            None => Err(AppError::transport("store no disponible")),
        };

        match &result {
            Ok(_) => log::info!("✅ [DASHBOARD] Ticket {} -> {}", bill_id, updated.status),
            Err(e) => log::error!("❌ [DASHBOARD] No se pudo guardar el ticket {}: {}", bill_id, e),
        }

        if self.is_mounted() {
            (self.on_navigate)(Route::Dashboard.path());
        } else {
            log::warn!("⚠️ [DASHBOARD] Vista desmontada antes de la respuesta, no se navega");
        }
        result
    }

    /// Muestra el justificativo en el modal; `false` si no hay modal disponible
    pub fn show_file_preview(&self, bill_id: &str) -> bool {
        let document = &self.state.document;
        let url = document
            .attribute(EYE_ICON_ID, "data-bill-url")
            .or_else(|| self.find_bill(bill_id).ok().map(|b| b.file_url.clone()))
            .unwrap_or_default();
        let width = document
            .element_width(ADMIN_FILE_MODAL_ID)
            .map(|w| (w * 0.8).floor())
            .unwrap_or(0.0);
        let body = format!(
            r#"<div style="text-align: center;"><img width="{}" src="{}" alt="Bill"/></div>"#,
            width,
            escape(&url)
        );

        let shown = document.show_modal(ADMIN_FILE_MODAL_ID, &body);
        if !shown {
            log::debug!("ℹ️ [DASHBOARD] Modal no disponible, vista previa omitida");
        }
        shown
    }

    fn bind_ticket_cards(&self) {
        let mut bound = 0;
        for bill in &self.bills {
            if self.registry.rebind(&ticket_card_id(&bill.id), EventKind::Click, self.ticket_handler(&bill.id)) {
                bound += 1;
            }
        }
        log::debug!("🔗 [DASHBOARD] {} tarjetas enlazadas", bound);
    }

    fn bind_detail_form(&self, bill: &Bill) {
        let preview = {
            let this = self.this.clone();
            let bill_id = bill.id.clone();
            Rc::new(move || {
                if let Some(vm) = this.upgrade() {
                    vm.show_file_preview(&bill_id);
                }
            }) as Handler
        };
        self.registry.rebind(EYE_ICON_ID, EventKind::Click, preview);
        self.registry.rebind(ACCEPT_BUTTON_ID, EventKind::Click, self.decision_handler(&bill.id, BillStatus::Accepted));
        self.registry.rebind(REFUSE_BUTTON_ID, EventKind::Click, self.decision_handler(&bill.id, BillStatus::Refused));
    }

    fn bucket_handler(&self, bucket: StatusBucket) -> Handler {
        let this = self.this.clone();
        Rc::new(move || {
            if let Some(vm) = this.upgrade() {
                if let Err(e) = vm.toggle_bucket(bucket) {
                    log::error!("❌ [DASHBOARD] Error abriendo bucket {}: {}", bucket.index(), e);
                }
            }
        })
    }

    fn ticket_handler(&self, bill_id: &str) -> Handler {
        let this = self.this.clone();
        let bill_id = bill_id.to_string();
        Rc::new(move || {
            if let Some(vm) = this.upgrade() {
                if let Err(e) = vm.open_ticket(&bill_id) {
                    log::error!("❌ [DASHBOARD] Error abriendo ticket {}: {}", bill_id, e);
                }
            }
        })
    }

    fn decision_handler(&self, bill_id: &str, status: BillStatus) -> Handler {
        let this = self.this.clone();
        let bill_id = bill_id.to_string();
        Rc::new(move || {
            let Some(vm) = this.upgrade() else {
                return;
            };
            let comment = vm.state.document.value(COMMENT_ID).unwrap_or_default();
            let bill_id = bill_id.clone();
            let status = status.clone();
            let task_vm = vm.clone();
            vm.state.spawn(async move {
                // El error ya quedó registrado en decide(); aquí solo se consume
                let _ = task_vm.decide(&bill_id, status, &comment).await;
            });
        })
    }
}

impl MountedView for DashboardViewModel {
    fn unmount(&self) {
        self.mounted.set(false);
        self.registry.clear();
        log::debug!("🧹 [DASHBOARD] Desmontado");
    }
}
