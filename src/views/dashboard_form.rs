// ============================================================================
// DASHBOARD FORM - Detalle editable de un ticket
// ============================================================================

use crate::models::{Bill, BillStatus};
use crate::utils::format_date;
use crate::utils::html::escape;
use crate::views::icons::{BIG_BILLED_ICON, EYE_ICON};

pub const EYE_ICON_ID: &str = "icon-eye-d";
pub const COMMENT_ID: &str = "commentary2";
pub const ACCEPT_BUTTON_ID: &str = "btn-accept-bill";
pub const REFUSE_BUTTON_ID: &str = "btn-refuse-bill";
pub const BIG_BILLED_ICON_ID: &str = "big-billed-icon";

pub fn render_big_billed_icon() -> String {
    format!(
        r#"<div id="{id}" data-testid="{id}"> {icon} </div>"#,
        id = BIG_BILLED_ICON_ID,
        icon = BIG_BILLED_ICON
    )
}

fn render_decision(bill: &Bill) -> String {
    if bill.status == BillStatus::Pending {
        format!(
            r#"<div class="row">
                 <div class="col-sm">
                   <label for="{comment}" class="bold-label">Ajouter un commentaire</label>
                   <div class="input-group">
                     <textarea id="{comment}" class="form-control blue-border" data-testid="commentary2" rows="5"></textarea>
                   </div>
                 </div>
               </div>
               <div class="row">
                 <div class="col-sm">
                   <button type="button" id="{refuse}" data-testid="btn-refuse-bill-d" class="btn btn-primary">Refuser</button>
                   <button type="button" id="{accept}" data-testid="btn-accept-bill-d" class="btn btn-primary">Accepter</button>
                 </div>
               </div>"#,
            comment = COMMENT_ID,
            refuse = REFUSE_BUTTON_ID,
            accept = ACCEPT_BUTTON_ID,
        )
    } else {
        format!(
            r#"<div class="row">
                 <div class="col-sm">
                   <label class="bold-label">Commentaire admin</label>
                   <div class="input-field"> {} </div>
                 </div>
               </div>"#,
            escape(bill.comment_admin.as_deref().unwrap_or(""))
        )
    }
}

pub fn render_dashboard_form(bill: &Bill) -> String {
    format!(
        r#"<div class="container dashboard-form" data-testid="dashboard-form">
             <div class="row">
               <div class="col-sm" id="dashboard-form-col1">
                 <label class="bold-label">Type de dépense</label>
                 <div class="input-field"> {expense_type} </div>
                 <label class="bold-label">Nom de la dépense</label>
                 <div class="input-field"> {name} </div>
                 <label class="bold-label">Date</label>
                 <div class="input-field"> {date} </div>
               </div>
               <div class="col-sm" id="dashboard-form-col2">
                 <label class="bold-label">Commentaire</label>
                 <div class="textarea-field" style="height:300px;"> {commentary} </div>
               </div>
             </div>
             <div class="row">
               <div class="col-sm">
                 <label class="bold-label">Montant TTC </label>
                 <div class="input-field input-flex"><span>{amount}</span><span> € </span></div>
               </div>
               <div class="col-sm">
                 <label class="bold-label">TVA</label>
                 <div id="vat-flex-container">
                   <div class="input-field input-flex vat-flex"><span>{vat}</span><span> € </span></div>
                   <div class="input-field input-flex vat-flex"><span>{pct}</span><span> % </span></div>
                 </div>
               </div>
             </div>
             <div class="row">
               <div class="col-sm">
                 <label class="bold-label">Justificatif</label>
                 <div class="input-field input-flex justify-content-between">
                   <span> {file_name} </span>
                   <div class="icons-container">
                     <span id="{eye}" data-testid="icon-eye-d" data-bill-url="{file_url}"> {eye_icon} </span>
                   </div>
                 </div>
               </div>
             </div>
             {decision}
           </div>"#,
        expense_type = escape(&bill.expense_type),
        name = escape(&bill.name),
        date = escape(&format_date(&bill.date)),
        commentary = escape(&bill.commentary),
        amount = bill.amount,
        vat = bill.vat,
        pct = bill.pct,
        file_name = escape(&bill.file_name),
        eye = EYE_ICON_ID,
        file_url = escape(&bill.file_url),
        eye_icon = EYE_ICON,
        decision = render_decision(bill),
    )
}
