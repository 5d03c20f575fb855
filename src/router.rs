// ============================================================================
// ROUTER - Rutas hash, control de acceso y montaje de vistas
// ============================================================================
// Cada navegación desmonta la vista anterior (sus listeners desaparecen) e
// incrementa una generación de montaje. Las cargas asíncronas comparan la
// generación al resolverse: si el usuario ya se fue, el resultado se descarta.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use crate::models::UserRole;
use crate::state::AppState;
use crate::utils::{ACTIVE_ICON_CLASS, ROOT_ID};
use crate::viewmodels::{BillsViewModel, DashboardViewModel, MountedView, NewBillViewModel};
use crate::views::layout::{BILLS_ICON_ID, NEW_BILL_ICON_ID};
use crate::views::{
    render_bills, render_dashboard, render_error, render_loading, render_login, render_new_bill, render_not_found,
};

/// Navegación inyectada en los viewmodels
pub type Navigate = Rc<dyn Fn(&str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Login, Route::Bills, Route::NewBill, Route::Dashboard];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path.trim() {
            "" | "/" => Some(Route::Login),
            other => Route::ALL.into_iter().find(|r| r.path() == other),
        }
    }

    /// `None` = ruta pública
    pub fn required_role(&self) -> Option<UserRole> {
        match self {
            Route::Login => None,
            Route::Bills | Route::NewBill => Some(UserRole::Employee),
            Route::Dashboard => Some(UserRole::Admin),
        }
    }
}

/// Estado visible del router
#[derive(Debug, Clone, PartialEq)]
pub enum RouteState {
    Mounted(Route),
    NotFound(String),
}

pub struct Router {
    state: AppState,
    current_view: RefCell<Option<Rc<dyn MountedView>>>,
    current: RefCell<Option<RouteState>>,
    generation: Cell<u64>,
    this: Weak<Router>,
}

impl Router {
    pub fn new(state: AppState) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            state,
            current_view: RefCell::new(None),
            current: RefCell::new(None),
            generation: Cell::new(0),
            this: this.clone(),
        })
    }

    pub fn current(&self) -> Option<RouteState> {
        self.current.borrow().clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Callback para los viewmodels: la navegación se ejecuta en una tarea
    /// posterior, nunca dentro del handler que la pide
    pub fn on_navigate(&self) -> Navigate {
        let this = self.this.clone();
        let state = self.state.clone();
        Rc::new(move |path: &str| {
            let this = this.clone();
            let path = path.to_string();
            state.spawn(async move {
                if let Some(router) = this.upgrade() {
                    router.navigate(&path);
                }
            });
        })
    }

    /// Navega y registra la ruta en el historial
    pub fn navigate(&self, path: &str) -> RouteState {
        self.go(path, true)
    }

    /// Navega sin tocar el historial (popstate / arranque)
    pub fn restore(&self, path: &str) -> RouteState {
        self.go(path, false)
    }

    fn go(&self, path: &str, record: bool) -> RouteState {
        let Some(requested) = Route::from_path(path) else {
            log::warn!("🧭 [ROUTER] Ruta desconocida: {}", path);
            self.detach();
            self.render(&render_not_found(path));
            let state = RouteState::NotFound(path.to_string());
            *self.current.borrow_mut() = Some(state.clone());
            return state;
        };

        let route = match requested.required_role() {
            Some(role) if !self.state.auth().require_role(role) => {
                log::warn!("🔒 [ROUTER] Acceso denegado a {}, redirigiendo a login", requested.path());
                Route::Login
            }
            _ => requested,
        };

        let generation = self.detach();
        if record {
            self.state.document.push_location(route.path());
        }
        log::info!("🧭 [ROUTER] Navegando a {} (montaje #{})", route.path(), generation);
        *self.current.borrow_mut() = Some(RouteState::Mounted(route));

        match route {
            Route::Login => self.render(&render_login()),
            Route::NewBill => {
                self.render(&render_new_bill());
                self.highlight_icons(route);
                let vm = NewBillViewModel::new(self.state.clone(), self.on_navigate());
                self.attach(vm);
            }
            Route::Bills => {
                self.render(&render_loading());
                self.load_bills(generation);
            }
            Route::Dashboard => {
                self.render(&render_loading());
                self.load_dashboard(generation);
            }
        }

        RouteState::Mounted(route)
    }

    /// Desmonta la vista actual; devuelve la generación del nuevo montaje
    fn detach(&self) -> u64 {
        let previous = self.current_view.borrow_mut().take();
        if let Some(view) = previous {
            view.unmount();
        }
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    fn attach(&self, view: Rc<dyn MountedView>) {
        *self.current_view.borrow_mut() = Some(view);
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn render(&self, html: &str) {
        if let Err(e) = self.state.document.set_inner_html(ROOT_ID, html) {
            log::error!("❌ [ROUTER] No se pudo renderizar: {}", e);
        }
    }

    fn highlight_icons(&self, route: Route) {
        let (active, inactive) = match route {
            Route::Bills => (BILLS_ICON_ID, NEW_BILL_ICON_ID),
            Route::NewBill => (NEW_BILL_ICON_ID, BILLS_ICON_ID),
            _ => return,
        };
        let document = &self.state.document;
        let result = document
            .add_class(active, ACTIVE_ICON_CLASS)
            .and_then(|_| document.remove_class(inactive, ACTIVE_ICON_CLASS));
        if let Err(e) = result {
            log::debug!("ℹ️ [ROUTER] Iconos de navegación no disponibles: {}", e);
        }
    }

    fn load_bills(&self, generation: u64) {
        let this = self.this.clone();
        let state = self.state.clone();
        self.state.spawn(async move {
            let rows = BillsViewModel::get_bills(&state).await;
            let Some(router) = this.upgrade() else {
                return;
            };
            if !router.is_current(generation) {
                log::debug!("⏭️ [ROUTER] Lista de notas descartada (montaje #{} obsoleto)", generation);
                return;
            }
            match rows {
                Ok(rows) => {
                    router.render(&render_bills(&rows));
                    router.highlight_icons(Route::Bills);
                    let vm = BillsViewModel::new(state.clone(), router.on_navigate(), &rows);
                    router.attach(vm);
                }
                Err(e) => {
                    log::error!("❌ [ROUTER] Error cargando notas: {}", e);
                    router.render(&render_error(&e.to_string()));
                }
            }
        });
    }

    fn load_dashboard(&self, generation: u64) {
        let this = self.this.clone();
        let state = self.state.clone();
        self.state.spawn(async move {
            let bills = DashboardViewModel::list_all_bills(&state).await;
            let Some(router) = this.upgrade() else {
                return;
            };
            if !router.is_current(generation) {
                log::debug!("⏭️ [ROUTER] Dashboard descartado (montaje #{} obsoleto)", generation);
                return;
            }
            match bills {
                Ok(bills) => {
                    router.render(&render_dashboard(&bills, &state.environment()));
                    let vm = DashboardViewModel::new(state.clone(), router.on_navigate(), bills);
                    router.attach(vm);
                }
                Err(e) => {
                    log::error!("❌ [ROUTER] Error cargando el dashboard: {}", e);
                    router.render(&render_error(&e.to_string()));
                }
            }
        });
    }
}
