// ============================================================================
// TESTING - Dobles de prueba compartidos (store en memoria + host de pruebas)
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use async_trait::async_trait;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use crate::config::AppConfig;
use crate::dom::{Document, MemoryDocument};
use crate::error::{AppError, AppResult};
use crate::models::{Bill, BillStatus, Session, UserRole};
use crate::router::Navigate;
use crate::services::{BillsApi, CreateBillArgs, CreatedFile, Store, UpdateBillArgs};
use crate::state::{AppState, LocalFuture, Spawner};
use crate::utils::{save_to_storage, MemoryStorage, SessionStorage, USER_STORAGE_KEY};

/// Store en memoria que registra las llamadas y puede simular fallos
#[derive(Default)]
pub struct MockStore {
    bills: RefCell<Vec<Bill>>,
    updates: RefCell<Vec<UpdateBillArgs>>,
    uploads: RefCell<Vec<(String, String)>>,
    list_error: RefCell<Option<String>>,
    create_error: RefCell<Option<String>>,
    update_error: RefCell<Option<String>>,
}

impl MockStore {
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: RefCell::new(bills),
            ..Self::default()
        }
    }

    pub fn bill(id: &str, email: &str, status: BillStatus) -> Bill {
        Bill {
            id: id.to_string(),
            email: email.to_string(),
            expense_type: "Transports".to_string(),
            name: format!("note {}", id),
            date: "2004-04-04".to_string(),
            amount: 348.0,
            vat: 70.0,
            pct: 20.0,
            commentary: "séminaire billed".to_string(),
            file_url: format!("https://localhost:3456/images/{}.jpg", id),
            file_name: format!("{}.jpg", id),
            status,
            comment_admin: None,
        }
    }

    pub fn updates(&self) -> Vec<UpdateBillArgs> {
        self.updates.borrow().clone()
    }

    /// (email, nombre de fichero) de cada subida
    pub fn uploads(&self) -> Vec<(String, String)> {
        self.uploads.borrow().clone()
    }

    pub fn fail_list(&self, message: &str) {
        *self.list_error.borrow_mut() = Some(message.to_string());
    }

    pub fn fail_create(&self, message: &str) {
        *self.create_error.borrow_mut() = Some(message.to_string());
    }

    pub fn fail_update(&self, message: &str) {
        *self.update_error.borrow_mut() = Some(message.to_string());
    }
}

#[async_trait(?Send)]
impl BillsApi for MockStore {
    async fn list(&self) -> AppResult<Vec<Bill>> {
        if let Some(message) = self.list_error.borrow().clone() {
            return Err(AppError::transport(message));
        }
        Ok(self.bills.borrow().clone())
    }

    async fn create(&self, args: CreateBillArgs) -> AppResult<CreatedFile> {
        if let Some(message) = self.create_error.borrow().clone() {
            return Err(AppError::transport(message));
        }
        let key = format!("created-{}", self.uploads.borrow().len() + 1);
        self.uploads.borrow_mut().push((args.email, args.file.name.clone()));
        Ok(CreatedFile {
            file_url: format!("https://localhost:3456/images/{}", args.file.name),
            key,
        })
    }

    async fn update(&self, args: UpdateBillArgs) -> AppResult<Bill> {
        self.updates.borrow_mut().push(args.clone());
        if let Some(message) = self.update_error.borrow().clone() {
            return Err(AppError::transport(message));
        }
        let bill: Bill = serde_json::from_str(&args.data)?;
        Ok(bill)
    }
}

impl Store for MockStore {
    fn bills(&self) -> &dyn BillsApi {
        self
    }
}

/// Documento + storage + store en memoria con un executor de un solo hilo
pub struct TestHost {
    pub document: Rc<MemoryDocument>,
    pub storage: Rc<MemoryStorage>,
    pub store: Rc<MockStore>,
    pub state: AppState,
    pool: RefCell<LocalPool>,
    navigations: Rc<RefCell<Vec<String>>>,
}

impl TestHost {
    pub fn new(bills: Vec<Bill>) -> Self {
        Self::with_document(bills, MemoryDocument::new())
    }

    pub fn with_document(bills: Vec<Bill>, document: MemoryDocument) -> Self {
        Self::build(bills, document, true)
    }

    /// Sin store configurado
    pub fn offline() -> Self {
        Self::build(Vec::new(), MemoryDocument::new(), false)
    }

    fn build(bills: Vec<Bill>, document: MemoryDocument, with_store: bool) -> Self {
        let pool = LocalPool::new();
        let spawner_handle = pool.spawner();
        let spawner: Spawner = Rc::new(move |future: LocalFuture| {
            if let Err(e) = spawner_handle.spawn_local(future) {
                panic!("executor de pruebas cerrado: {}", e);
            }
        });

        let document = Rc::new(document);
        let storage = Rc::new(MemoryStorage::new());
        let store = Rc::new(MockStore::with_bills(bills));
        let store_port: Option<Rc<dyn Store>> = if with_store {
            Some(store.clone() as Rc<dyn Store>)
        } else {
            None
        };
        let config = AppConfig {
            test_users: vec!["test@billed.tld".to_string()],
            ..AppConfig::default()
        };
        let state = AppState::new(
            config,
            document.clone() as Rc<dyn Document>,
            storage.clone() as Rc<dyn SessionStorage>,
            store_port,
            spawner,
        );

        Self {
            document,
            storage,
            store,
            state,
            pool: RefCell::new(pool),
            navigations: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn login_as(&self, role: UserRole, email: &str) {
        save_to_storage(self.storage.as_ref(), USER_STORAGE_KEY, &Session::new(role, email)).unwrap();
    }

    /// Navegación que solo registra las rutas pedidas
    pub fn navigation_recorder(&self) -> Navigate {
        let navigations = self.navigations.clone();
        Rc::new(move |path: &str| navigations.borrow_mut().push(path.to_string()))
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        self.state.spawn(future);
    }

    /// Ejecuta todas las tareas listas (incluidas las que lancen otras tareas)
    pub fn settle(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }
}
