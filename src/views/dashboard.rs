// ============================================================================
// DASHBOARD VIEW - Buckets por estado + panel de detalle
// ============================================================================

use crate::models::{Bill, BillStatus};
use crate::state::{Environment, StatusBucket};
use crate::utils::format_date;
use crate::utils::html::escape;
use crate::views::dashboard_form::render_big_billed_icon;
use crate::views::icons::ARROW_ICON;
use crate::views::layout::render_vertical_layout;

pub const DETAIL_PANE_ID: &str = "dashboard-detail";
pub const ADMIN_FILE_MODAL_ID: &str = "modaleFileAdmin1";

pub fn arrow_icon_id(bucket: StatusBucket) -> String {
    format!("arrow-icon{}", bucket.index())
}

pub fn bucket_container_id(bucket: StatusBucket) -> String {
    format!("status-bills-container{}", bucket.index())
}

pub fn ticket_card_id(bill_id: &str) -> String {
    format!("open-bill{}", bill_id)
}

/// Estado asociado al índice de bucket 1..=3
pub fn get_status(index: u8) -> Option<BillStatus> {
    StatusBucket::from_index(index).map(|b| b.status())
}

pub fn filtered_bills<'a>(bills: &'a [Bill], status: &BillStatus, env: &Environment) -> Vec<&'a Bill> {
    bills
        .iter()
        .filter(|bill| &bill.status == status && env.is_visible(bill))
        .collect()
}

/// `jean.dupont@x.tld` -> ("jean", "dupont"); sin punto todo va al apellido
fn split_names(email: &str) -> (&str, &str) {
    let local = email.split('@').next().unwrap_or("");
    match local.split_once('.') {
        Some((first, rest)) => (first, rest.split('.').next().unwrap_or(rest)),
        None => ("", local),
    }
}

pub fn card(bill: &Bill) -> String {
    let (first_name, last_name) = split_names(&bill.email);
    format!(
        r#"<div class="bill-card" id="{id}" data-testid="{id}">
             <div class="bill-card-name-container">
               <div class="bill-card-name"> {first} {last} </div>
               <span class="bill-card-grey"> ... </span>
             </div>
             <div class="name-price-container">
               <span> {name} </span>
               <span> {amount} € </span>
             </div>
             <div class="date-type-container">
               <span> {date} </span>
               <span> {expense_type} </span>
             </div>
           </div>"#,
        id = escape(&ticket_card_id(&bill.id)),
        first = escape(first_name),
        last = escape(last_name),
        name = escape(&bill.name),
        amount = bill.amount,
        date = escape(&format_date(&bill.date)),
        expense_type = escape(&bill.expense_type),
    )
}

pub fn cards(bills: &[&Bill]) -> String {
    bills.iter().map(|bill| card(bill)).collect()
}

fn render_bucket_header(bucket: StatusBucket, count: usize) -> String {
    format!(
        r#"<div class="status-bills-header" id="status-bills-header{index}">
             <h3> {label} ({count}) </h3>
             <span id="{arrow}" data-testid="arrow-icon{index}">{icon}</span>
           </div>
           <div class="status-bills-container" id="{container}" data-testid="status-bills-container{index}"></div>"#,
        index = bucket.index(),
        label = bucket.label(),
        count = count,
        arrow = arrow_icon_id(bucket),
        icon = ARROW_ICON,
        container = bucket_container_id(bucket),
    )
}

fn render_modal() -> String {
    format!(
        r#"<div class="modal fade" id="{}" data-testid="modaleFileAdmin" tabindex="-1" role="dialog" aria-hidden="true">
             <div class="modal-dialog modal-dialog-centered modal-lg" role="document">
               <div class="modal-content">
                 <div class="modal-header">
                   <h5 class="modal-title">Justificatif</h5>
                   <button type="button" class="close" data-dismiss="modal" aria-label="Close"><span aria-hidden="true">&times;</span></button>
                 </div>
                 <div class="modal-body"></div>
               </div>
             </div>
           </div>"#,
        ADMIN_FILE_MODAL_ID
    )
}

/// Página completa; los buckets empiezan plegados y vacíos
pub fn render_dashboard(bills: &[Bill], env: &Environment) -> String {
    let headers: String = StatusBucket::ALL
        .into_iter()
        .map(|bucket| render_bucket_header(bucket, filtered_bills(bills, &bucket.status(), env).len()))
        .collect();

    format!(
        r#"<div class="layout">
             {layout}
             <div class="dashboard-content">
               <div class="dashboard-left-container">{headers}</div>
               <div class="dashboard-right-container">
                 <div id="{detail}">{placeholder}</div>
               </div>
             </div>
             {modal}
           </div>"#,
        layout = render_vertical_layout(120, false),
        headers = headers,
        detail = DETAIL_PANE_ID,
        placeholder = render_big_billed_icon(),
        modal = render_modal(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(id: &str, email: &str, status: BillStatus) -> Bill {
        Bill {
            id: id.to_string(),
            email: email.to_string(),
            status,
            ..Bill::default()
        }
    }

    #[test]
    fn card_splits_email_into_names() {
        assert_eq!(split_names("jean.dupont@billed.tld"), ("jean", "dupont"));
        assert_eq!(split_names("a@a"), ("", "a"));
        assert_eq!(split_names(""), ("", ""));
        let html = card(&bill("xyz", "jean.dupont@billed.tld", BillStatus::Pending));
        assert!(html.contains(r#"id="open-billxyz""#));
        assert!(html.contains(" jean dupont "));
    }

    #[test]
    fn filters_by_status_and_environment() {
        let bills = vec![
            bill("1", "a@a", BillStatus::Pending),
            bill("2", "admin@billed.tld", BillStatus::Pending),
            bill("3", "test@billed.tld", BillStatus::Pending),
            bill("4", "a@a", BillStatus::Refused),
        ];
        let env = Environment {
            current_user_email: Some("admin@billed.tld".to_string()),
            excluded_emails: vec!["test@billed.tld".to_string()],
        };

        let pending: Vec<&str> = filtered_bills(&bills, &BillStatus::Pending, &env)
            .into_iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(pending, vec!["1"]);

        let unrestricted = filtered_bills(&bills, &BillStatus::Pending, &Environment::default());
        assert_eq!(unrestricted.len(), 3);
        assert!(filtered_bills(&[], &BillStatus::Accepted, &env).is_empty());
    }

    #[test]
    fn status_index_mapping() {
        assert_eq!(get_status(1), Some(BillStatus::Pending));
        assert_eq!(get_status(2), Some(BillStatus::Accepted));
        assert_eq!(get_status(3), Some(BillStatus::Refused));
        assert_eq!(get_status(7), None);
    }

    #[test]
    fn buckets_start_empty() {
        let html = render_dashboard(&[bill("1", "a@a", BillStatus::Pending)], &Environment::default());
        assert!(html.contains("En attente (1)"));
        assert!(html.contains("Validé (0)"));
        assert!(!html.contains("open-bill1"));
    }
}
