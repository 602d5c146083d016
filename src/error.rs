// ============================================================================
// ERRORES DEL NÚCLEO - Condiciones tipadas que ve la capa de UI
// ============================================================================
// Ninguna operación reintenta sola: cada fallo vuelve al caller como una de
// estas condiciones y la UI decide el mensaje o el reintento. Unauthorized
// nunca aparece acá: el SessionGuard lo convierte en SessionEnded.
// ============================================================================

/// Condición devuelta por las operaciones de carrito y checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// La red falló antes de llegar a una respuesta del backend
    NetworkUnavailable(String),
    /// El backend rechazó la operación; el mensaje se muestra tal cual
    ServerRejected(String),
    /// Ya hay una mutación en vuelo para esa línea; reintentar al completar
    MutationInProgress(String),
    /// No se puede pasar a pagar con el carrito vacío
    EmptyCart,
    /// Falta elegir método de pago antes de confirmar
    NoMethodSelected,
    /// La sesión fue invalidada; toda llamada posterior falla sin tocar la red
    SessionEnded,
    /// El coordinador ya entregó su orden; un intento nuevo requiere otro
    CheckoutClosed,
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderError::NetworkUnavailable(detail) => {
                write!(f, "Sin conexión con el servidor: {}", detail)
            }
            OrderError::ServerRejected(message) => write!(f, "{}", message),
            OrderError::MutationInProgress(key) => {
                write!(f, "Ya hay una operación en curso para {}", key)
            }
            OrderError::EmptyCart => write!(f, "El carrito está vacío"),
            OrderError::NoMethodSelected => write!(f, "Elegí un método de pago"),
            OrderError::SessionEnded => write!(f, "La sesión terminó, iniciá sesión de nuevo"),
            OrderError::CheckoutClosed => write!(f, "Este checkout ya fue confirmado"),
        }
    }
}

impl std::error::Error for OrderError {}
