// ============================================================================
// BILLS VIEWMODEL - Lista de notas del empleado
// ============================================================================

use std::rc::{Rc, Weak};
use crate::dom::{EventKind, HandlerRegistry};
use crate::error::AppResult;
use crate::models::BillRow;
use crate::router::{Navigate, Route};
use crate::services::list_all_bills;
use crate::state::AppState;
use crate::utils::html::escape;
use crate::utils::{format_date, format_status};
use crate::viewmodels::{LogoutViewModel, MountedView};
use crate::views::bills::{eye_icon_id, BILL_FILE_MODAL_ID, NEW_BILL_BUTTON_ID};

pub struct BillsViewModel {
    state: AppState,
    on_navigate: Navigate,
    registry: HandlerRegistry,
    this: Weak<BillsViewModel>,
}

impl BillsViewModel {
    /// Notas del store, de la más reciente a la más antigua, con fecha y estado legibles
    pub async fn get_bills(state: &AppState) -> AppResult<Vec<BillRow>> {
        let Some(store) = &state.store else {
            log::warn!("⚠️ [BILLS] Sin store, lista vacía");
            return Ok(Vec::new());
        };

        let mut bills = list_all_bills(store.as_ref()).await?;
        // Orden sobre la fecha ISO sin formatear
        bills.sort_by(|a, b| b.date.cmp(&a.date));

        let rows: Vec<BillRow> = bills
            .into_iter()
            .map(|bill| BillRow {
                date: format_date(&bill.date),
                status: format_status(bill.status.as_str()),
                bill,
            })
            .collect();
        log::info!("📋 [BILLS] {} notas cargadas", rows.len());
        Ok(rows)
    }

    /// Enlaza los handlers sobre la lista ya renderizada
    pub fn new(state: AppState, on_navigate: Navigate, rows: &[BillRow]) -> Rc<Self> {
        let registry = HandlerRegistry::new(state.document.clone());
        let vm = Rc::new_cyclic(|this| Self {
            state,
            on_navigate,
            registry,
            this: this.clone(),
        });

        let this = vm.this.clone();
        vm.registry.rebind(
            NEW_BILL_BUTTON_ID,
            EventKind::Click,
            Rc::new(move || {
                if let Some(vm) = this.upgrade() {
                    vm.handle_click_new_bill();
                }
            }),
        );

        for row in rows {
            let this = vm.this.clone();
            let bill_id = row.bill.id.clone();
            vm.registry.rebind(
                &eye_icon_id(&row.bill.id),
                EventKind::Click,
                Rc::new(move || {
                    if let Some(vm) = this.upgrade() {
                        vm.handle_click_icon_eye(&bill_id);
                    }
                }),
            );
        }

        LogoutViewModel::bind(&vm.state, &vm.registry, vm.on_navigate.clone());
        vm
    }

    pub fn handle_click_new_bill(&self) {
        (self.on_navigate)(Route::NewBill.path());
    }

    /// Abre el justificativo en el modal a media anchura
    pub fn handle_click_icon_eye(&self, bill_id: &str) -> bool {
        let document = &self.state.document;
        let url = document.attribute(&eye_icon_id(bill_id), "data-bill-url").unwrap_or_default();
        let width = document
            .element_width(BILL_FILE_MODAL_ID)
            .map(|w| (w * 0.5).floor())
            .unwrap_or(0.0);
        let body = format!(
            r#"<div style="text-align: center;" class="bill-proof-container"><img width="{}" src="{}" alt="Bill" /></div>"#,
            width,
            escape(&url)
        );
        document.show_modal(BILL_FILE_MODAL_ID, &body)
    }
}

impl MountedView for BillsViewModel {
    fn unmount(&self) {
        self.registry.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::models::{Bill, BillStatus, UserRole};
    use crate::testing::{MockStore, TestHost};
    use crate::views::render_bills;
    use crate::views::layout::DISCONNECT_ID;
    use crate::utils::ROOT_ID;
    use std::cell::RefCell;

    fn dated(id: &str, date: &str) -> Bill {
        Bill {
            date: date.to_string(),
            ..MockStore::bill(id, "a@a", BillStatus::Pending)
        }
    }

    fn load_rows(host: &TestHost) -> AppResult<Vec<BillRow>> {
        let out = Rc::new(RefCell::new(None));
        let slot = out.clone();
        let state = host.state.clone();
        host.spawn(async move {
            *slot.borrow_mut() = Some(BillsViewModel::get_bills(&state).await);
        });
        host.settle();
        let result = out.borrow_mut().take();
        result.unwrap()
    }

    #[test]
    fn bills_are_sorted_newest_first_and_formatted() {
        let host = TestHost::new(vec![
            dated("old", "2001-01-01"),
            dated("new", "2004-04-04"),
            dated("mid", "2003-03-03"),
        ]);
        let rows = load_rows(&host).unwrap();

        let ids: Vec<&str> = rows.iter().map(|r| r.bill.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
        assert_eq!(rows[0].date, "April 4, 2004");
        assert_eq!(rows[0].status, "Pending");
    }

    #[test]
    fn unknown_status_is_capitalised() {
        let host = TestHost::new(vec![
            Bill {
                status: BillStatus::parse("approved"),
                ..dated("b", "2023-08-09")
            },
            dated("a", "2023-08-10"),
        ]);
        let rows = load_rows(&host).unwrap();

        let shaped: Vec<(&str, &str)> = rows.iter().map(|r| (r.date.as_str(), r.status.as_str())).collect();
        assert_eq!(shaped, vec![("August 10, 2023", "Pending"), ("August 9, 2023", "Approved")]);
    }

    #[test]
    fn corrupted_date_is_kept_raw() {
        let host = TestHost::new(vec![dated("x", "not-a-date")]);
        let rows = load_rows(&host).unwrap();
        assert_eq!(rows[0].date, "not-a-date");
    }

    #[test]
    fn store_error_propagates() {
        let host = TestHost::new(vec![]);
        host.store.fail_list("404");
        assert!(load_rows(&host).is_err());
    }

    #[test]
    fn no_store_yields_empty_list() {
        let host = TestHost::offline();
        assert!(load_rows(&host).unwrap().is_empty());
    }

    fn mount(host: &TestHost) -> Rc<BillsViewModel> {
        let rows = load_rows(host).unwrap();
        host.document.set_inner_html(ROOT_ID, &render_bills(&rows)).unwrap();
        BillsViewModel::new(host.state.clone(), host.navigation_recorder(), &rows)
    }

    #[test]
    fn new_bill_button_navigates() {
        let host = TestHost::new(vec![dated("a", "2004-04-04")]);
        let _vm = mount(&host);
        assert_eq!(host.document.click(NEW_BILL_BUTTON_ID), 1);
        assert_eq!(host.navigations(), vec![Route::NewBill.path().to_string()]);
    }

    #[test]
    fn eye_icon_opens_modal_at_half_width() {
        let host = TestHost::new(vec![dated("a", "2004-04-04")]);
        let _vm = mount(&host);
        host.document.set_width(BILL_FILE_MODAL_ID, 801.0);

        host.document.click(&eye_icon_id("a"));

        let modals = host.document.modals();
        assert_eq!(modals.len(), 1);
        assert!(modals[0].1.contains(r#"width="400""#));
        assert!(modals[0].1.contains("https://localhost:3456/images/a.jpg"));
    }

    #[test]
    fn logout_clears_session_and_goes_to_login() {
        let host = TestHost::new(vec![]);
        host.login_as(UserRole::Employee, "a@a");
        let _vm = mount(&host);

        host.document.click(DISCONNECT_ID);

        assert!(host.storage.is_empty());
        assert_eq!(host.navigations(), vec![Route::Login.path().to_string()]);
    }

    #[test]
    fn unmount_releases_listeners() {
        let host = TestHost::new(vec![dated("a", "2004-04-04")]);
        let vm = mount(&host);
        assert!(host.document.total_listeners() > 0);
        vm.unmount();
        assert_eq!(host.document.total_listeners(), 0);
    }
}
