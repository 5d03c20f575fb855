// ============================================================================
// NEW BILL VIEW - Formulario de nota nueva
// ============================================================================

use crate::views::layout::render_vertical_layout;

pub const FORM_ID: &str = "form-new-bill";
pub const EXPENSE_TYPE_ID: &str = "expense-type";
pub const EXPENSE_NAME_ID: &str = "expense-name";
pub const DATE_ID: &str = "datepicker";
pub const AMOUNT_ID: &str = "amount";
pub const VAT_ID: &str = "vat";
pub const PCT_ID: &str = "pct";
pub const COMMENTARY_ID: &str = "commentary";
pub const FILE_INPUT_ID: &str = "file";

const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

pub fn render_new_bill() -> String {
    let options: String = EXPENSE_TYPES
        .iter()
        .map(|t| format!("<option>{}</option>", t))
        .collect();

    format!(
        r#"<div class="layout">
             {layout}
             <div class="content">
               <div class="content-header"><div class="content-title">Envoyer une note de frais</div></div>
               <div class="form-newbill-container content-inner">
                 <form data-testid="form-new-bill" id="{form}">
                   <div class="row">
                     <div class="col-md-6">
                       <label for="{expense_type}" class="bold-label">Type de dépense</label>
                       <select required class="form-control blue-border" data-testid="expense-type" id="{expense_type}">{options}</select>
                       <label for="{expense_name}" class="bold-label">Nom de la dépense</label>
                       <input type="text" class="form-control blue-border" data-testid="expense-name" id="{expense_name}" placeholder="Vol Paris Londres" />
                       <label for="{date}" class="bold-label">Date</label>
                       <input required type="date" class="form-control blue-border" data-testid="datepicker" id="{date}" />
                       <label for="{amount}" class="bold-label">Montant TTC </label>
                       <input required type="number" class="form-control blue-border input-icon input-icon-right" data-testid="amount" id="{amount}" placeholder="348" />
                       <label for="{vat}" class="bold-label">TVA</label>
                       <input type="number" class="form-control blue-border" data-testid="vat" id="{vat}" placeholder="70" />
                       <input required type="number" class="form-control blue-border" data-testid="pct" id="{pct}" placeholder="20" />
                     </div>
                     <div class="col-md-6">
                       <label for="{commentary}" class="bold-label">Commentaire</label>
                       <textarea class="form-control blue-border" data-testid="commentary" id="{commentary}" rows="3"></textarea>
                       <label for="{file}" class="bold-label">Justificatif</label>
                       <input required type="file" accept=".jpg,.jpeg,.png" class="form-control blue-border" data-testid="file" id="{file}" />
                     </div>
                   </div>
                   <div class="row">
                     <button type="submit" id="btn-send-bill" class="btn btn-primary">Envoyer</button>
                   </div>
                 </form>
               </div>
             </div>
           </div>"#,
        layout = render_vertical_layout(120, true),
        form = FORM_ID,
        expense_type = EXPENSE_TYPE_ID,
        options = options,
        expense_name = EXPENSE_NAME_ID,
        date = DATE_ID,
        amount = AMOUNT_ID,
        vat = VAT_ID,
        pct = PCT_ID,
        commentary = COMMENTARY_ID,
        file = FILE_INPUT_ID,
    )
}
