// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod cart_state;
pub mod reactivity;
pub mod session_guard;

pub use cart_state::*;
pub use reactivity::*;
pub use session_guard::*;
