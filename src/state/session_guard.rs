// ============================================================================
// SESSION GUARD - Choke point de "el backend rechazó mi credencial"
// ============================================================================
// Convierte cualquier 401 en UNA transición determinista a logout: borra la
// credencial persistida y avisa una sola vez, aunque fallen varias llamadas
// en vuelo a la vez. No hay re-login automático: recuperarse es loguearse de
// nuevo y construir un guard fresco.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::OrderError;
use crate::services::api_client::ApiError;
use crate::services::credentials::CredentialProvider;

/// Estado del guard: Active → Invalidated (terminal para esta instancia)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Invalidated,
}

/// Guard de sesión; los clones comparten el mismo estado
#[derive(Clone)]
pub struct SessionGuard {
    state: Rc<Cell<SessionState>>,
    credentials: Rc<dyn CredentialProvider>,
    listeners: Rc<RefCell<Vec<Box<dyn Fn()>>>>,
}

impl SessionGuard {
    pub fn new(credentials: Rc<dyn CredentialProvider>) -> Self {
        Self {
            state: Rc::new(Cell::new(SessionState::Active)),
            credentials,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn is_active(&self) -> bool {
        self.state.get() == SessionState::Active
    }

    /// Registrar un listener para la notificación única de "sesión terminada"
    /// (típicamente: navegar a la pantalla de login)
    pub fn on_session_ended<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(callback));
    }

    /// Fail-fast antes de despachar: con la sesión invalidada ninguna
    /// operación toca la red
    pub fn ensure_active(&self) -> Result<(), OrderError> {
        match self.state.get() {
            SessionState::Active => Ok(()),
            SessionState::Invalidated => Err(OrderError::SessionEnded),
        }
    }

    /// Inspeccionar el resultado de una llamada envuelta. Unauthorized
    /// dispara la invalidación y se traduce a SessionEnded; el resto de los
    /// errores pasan tipados al caller.
    pub fn check<T>(&self, result: Result<T, ApiError>) -> Result<T, OrderError> {
        match result {
            Ok(value) => Ok(value),
            Err(ApiError::Unauthorized) => {
                self.invalidate();
                Err(OrderError::SessionEnded)
            }
            Err(ApiError::NetworkUnavailable(detail)) => {
                Err(OrderError::NetworkUnavailable(detail))
            }
            Err(ApiError::ServerRejected(message)) => Err(OrderError::ServerRejected(message)),
        }
    }

    fn invalidate(&self) {
        // Disparo único: si otra llamada en vuelo ya invalidó, no repetir
        if self.state.get() == SessionState::Invalidated {
            return;
        }
        self.state.set(SessionState::Invalidated);
        self.credentials.clear();
        log::warn!("🔒 Sesión invalidada por el backend; credencial eliminada");
        for listener in self.listeners.borrow().iter() {
            listener();
        }
    }
}
