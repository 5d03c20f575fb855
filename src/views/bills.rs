// ============================================================================
// BILLS VIEW - Lista de notas del empleado
// ============================================================================

use crate::models::BillRow;
use crate::utils::html::escape;
use crate::views::icons::EYE_ICON;
use crate::views::layout::render_vertical_layout;

pub const NEW_BILL_BUTTON_ID: &str = "btn-new-bill";
pub const BILL_FILE_MODAL_ID: &str = "modaleFile";

pub fn eye_icon_id(bill_id: &str) -> String {
    format!("icon-eye-{}", bill_id)
}

fn render_row(row: &BillRow) -> String {
    let bill = &row.bill;
    format!(
        r#"<tr>
             <td>{}</td>
             <td>{}</td>
             <td>{}</td>
             <td>{} €</td>
             <td>{}</td>
             <td>
               <div class="icon-actions">
                 <div class="icon-eye" id="{}" data-testid="icon-eye" data-bill-url="{}">{}</div>
               </div>
             </td>
           </tr>"#,
        escape(&bill.expense_type),
        escape(&bill.name),
        escape(&row.date),
        bill.amount,
        escape(&row.status),
        escape(&eye_icon_id(&bill.id)),
        escape(&bill.file_url),
        EYE_ICON,
    )
}

fn render_modal() -> String {
    format!(
        r#"<div class="modal fade" id="{}" data-testid="modaleFile" tabindex="-1" role="dialog" aria-hidden="true">
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
        BILL_FILE_MODAL_ID
    )
}

pub fn render_bills(rows: &[BillRow]) -> String {
    let body: String = rows.iter().map(render_row).collect();
    format!(
        r#"<div class="layout">
             {layout}
             <div class="content">
               <div class="content-header">
                 <div class="content-title">Mes notes de frais</div>
                 <button type="button" data-testid="btn-new-bill" id="{button}" class="btn btn-primary">Nouvelle note de frais</button>
               </div>
               <div id="data-table">
                 <table id="example" class="table table-striped" style="width:100%">
                   <thead>
                     <tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr>
                   </thead>
                   <tbody data-testid="tbody">{body}</tbody>
                 </table>
               </div>
             </div>
             {modal}
           </div>"#,
        layout = render_vertical_layout(120, true),
        button = NEW_BILL_BUTTON_ID,
        body = body,
        modal = render_modal(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bill;

    #[test]
    fn renders_one_eye_icon_per_row() {
        let rows = vec![
            BillRow {
                bill: Bill { id: "a".into(), file_url: "https://x.tld/a.png".into(), ..Bill::default() },
                date: "August 10, 2023".into(),
                status: "Pending".into(),
            },
            BillRow {
                bill: Bill { id: "b".into(), ..Bill::default() },
                date: "August 9, 2023".into(),
                status: "Refused".into(),
            },
        ];
        let html = render_bills(&rows);
        assert_eq!(html.matches("data-testid=\"icon-eye\"").count(), 2);
        assert!(html.contains("August 10, 2023"));
        assert!(html.contains(r#"data-bill-url="https://x.tld/a.png""#));
    }
}
