// ============================================================================
// FOOD ORDERING PWA - NÚCLEO CARRITO/CHECKOUT (RUST PURO)
// ============================================================================
// Espejo local del carrito remoto autoritativo + paso a pagar:
// - Models: estructuras compartidas con el backend
// - Services: SOLO comunicación API + credencial almacenada
// - State: snapshot reactivo con Rc<RefCell> y guard de sesión
// - ViewModels: lógica de carrito y checkout (sin UI)
// Las vistas, la navegación, el login y la ejecución del pago viven fuera
// de este crate; acá sólo se consume el token y se prepara la orden.
// ============================================================================

pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

pub use error::OrderError;
pub use models::{CartLine, CartSnapshot, MutationIntent, OrderSummary, PaymentMethod, Totals};
pub use services::{ApiError, CartTransport};
pub use state::{CartState, SessionGuard, SessionState};
pub use viewmodels::{CartViewModel, CheckoutViewModel, PaymentHandoff};

#[cfg(target_arch = "wasm32")]
pub use services::{ApiClient, StorageCredentials};
