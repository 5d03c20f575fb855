// ============================================================================
// BILL SERVICE - Operaciones de notas sobre el Store (sin estado)
// ============================================================================

use crate::dom::SelectedFile;
use crate::error::AppResult;
use crate::models::Bill;
use crate::services::store::{CreateBillArgs, CreatedFile, Store, UpdateBillArgs};

/// Lista completa de notas; los errores del store se propagan
pub async fn list_all_bills(store: &dyn Store) -> AppResult<Vec<Bill>> {
    let snapshot = store.bills().list().await?;
    Ok(snapshot
        .into_iter()
        .map(|doc| Bill {
            date: doc.date.clone(),
            status: doc.status.clone(),
            ..doc
        })
        .collect())
}

/// Serializa la nota completa y la actualiza por id. Sin reintentos.
pub async fn persist_status(store: &dyn Store, bill: &Bill) -> AppResult<Bill> {
    update_bill(store, bill, &bill.id).await
}

pub async fn update_bill(store: &dyn Store, bill: &Bill, selector: &str) -> AppResult<Bill> {
    let data = serde_json::to_string(bill)?;
    log::info!("💾 [STORE] Actualizando nota {} ({})", selector, bill.status);
    store
        .bills()
        .update(UpdateBillArgs {
            data,
            selector: selector.to_string(),
        })
        .await
}

pub async fn upload_receipt(store: &dyn Store, email: &str, file: SelectedFile) -> AppResult<CreatedFile> {
    store
        .bills()
        .create(CreateBillArgs {
            email: email.to_string(),
            file,
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BillStatus;
    use crate::testing::MockStore;
    use futures::executor::block_on;

    #[test]
    fn persist_sends_full_record_keyed_by_id() {
        let store = MockStore::with_bills(vec![MockStore::bill("b1", "a@a", BillStatus::Pending)]);
        let bill = MockStore::bill("b1", "a@a", BillStatus::Pending).with_decision(BillStatus::Accepted, "ok");

        let saved = block_on(persist_status(&store, &bill)).unwrap();

        let updates = store.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].selector, "b1");
        let sent: Bill = serde_json::from_str(&updates[0].data).unwrap();
        assert_eq!(sent, bill);
        assert_eq!(saved.status, BillStatus::Accepted);
    }

    #[test]
    fn list_failure_propagates() {
        let store = MockStore::with_bills(vec![]);
        store.fail_list("500 Internal Server Error");
        let err = block_on(list_all_bills(&store)).unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn update_failure_propagates() {
        let store = MockStore::with_bills(vec![]);
        store.fail_update("404 Not Found");
        let bill = MockStore::bill("b9", "a@a", BillStatus::Refused);
        assert!(block_on(persist_status(&store, &bill)).is_err());
    }
}
