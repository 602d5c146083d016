// ============================================================================
// CART VIEWMODEL - Espejo autoritativo del carrito remoto
// ============================================================================
// Toda mutación es un round-trip: se marca la línea como pendiente, se
// despacha UNA vez (sin reintentos) y recién con la respuesta autoritativa
// se reemplaza el snapshot. La cantidad mostrada nunca cambia de forma
// optimista: el backend puede rechazar (stock, plato dado de baja) y una
// segunda mutación local no debe adelantarse a una sin confirmar.
// ============================================================================

use crate::error::OrderError;
use crate::models::cart::{CartLine, MutationIntent, Totals};
use crate::services::api_client::{CartLineDto, CartTransport};
use crate::state::cart_state::CartState;
use crate::state::session_guard::SessionGuard;

/// ViewModel del carrito; la UI dispara operaciones y se suscribe al estado
pub struct CartViewModel<T: CartTransport> {
    transport: T,
    guard: SessionGuard,
    state: CartState,
}

impl<T: CartTransport> CartViewModel<T> {
    pub fn new(transport: T, guard: SessionGuard) -> Self {
        let state = CartState::new();

        // Al terminar la sesión el carrito local se descarta
        {
            let state = state.clone();
            guard.on_session_ended(move || state.clear());
        }

        Self {
            transport,
            guard,
            state,
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    /// Totales del snapshot actual; puros, siempre disponibles
    pub fn totals(&self) -> Totals {
        self.state.totals()
    }

    /// Cargar el carrito completo desde el backend y reemplazar el snapshot.
    /// Si falla, el snapshot previo queda intacto (stale pero visible).
    pub async fn load(&self) -> Result<(), OrderError> {
        self.guard.ensure_active()?;
        log::info!("🛒 Cargando carrito desde el backend...");

        let dtos = self.guard.check(self.transport.fetch_cart().await)?;
        self.accept_cart(dtos)
    }

    /// Cambiar la cantidad de una línea. Cantidad < 1 se redefine como
    /// eliminación: nunca viaja una cantidad no positiva por el wire.
    pub async fn set_quantity(&self, line_id: &str, quantity: u32) -> Result<(), OrderError> {
        if quantity < 1 {
            return self.remove(line_id).await;
        }

        self.guard.ensure_active()?;
        self.state.begin_mutation(MutationIntent::SetQuantity {
            line_id: line_id.to_string(),
            quantity,
        })?;

        let result = self.transport.update_line(line_id, quantity).await;
        self.state.finish_mutation(line_id);

        let dtos = self.guard.check(result)?;
        self.accept_cart(dtos)
    }

    /// Eliminar una línea. La UI ya pasó por el modal de confirmación; acá
    /// la decisión viene tomada. DELETE sólo confirma; el snapshot nuevo
    /// sale del re-fetch posterior.
    pub async fn remove(&self, line_id: &str) -> Result<(), OrderError> {
        self.guard.ensure_active()?;
        self.state.begin_mutation(MutationIntent::Remove {
            line_id: line_id.to_string(),
        })?;

        let result = self.transport.delete_line(line_id).await;
        let refetch = match result {
            Ok(()) => self.transport.fetch_cart().await,
            Err(e) => Err(e),
        };
        self.state.finish_mutation(line_id);

        let dtos = self.guard.check(refetch)?;
        self.accept_cart(dtos)
    }

    /// Agregar un plato al carrito (pantalla de detalle). La clave de vuelo
    /// es el id del plato: un doble tap no se corre a sí mismo.
    pub async fn add_item(&self, food_item_id: &str, quantity: u32) -> Result<(), OrderError> {
        self.guard.ensure_active()?;

        // El stepper de la UI arranca en 1; acá sólo se asegura el invariante
        let quantity = quantity.max(1);

        self.state.begin_mutation(MutationIntent::AddItem {
            food_item_id: food_item_id.to_string(),
            quantity,
        })?;

        let result = self.transport.add_item(food_item_id, quantity).await;
        self.state.finish_mutation(food_item_id);

        let dtos = self.guard.check(result)?;
        self.accept_cart(dtos)
    }

    /// Aceptar el carrito devuelto por el backend como snapshot nuevo
    fn accept_cart(&self, dtos: Vec<CartLineDto>) -> Result<(), OrderError> {
        let mut lines: Vec<CartLine> = Vec::with_capacity(dtos.len());
        for dto in dtos {
            // Cantidad 0 significa "la línea no existe"; no se almacena nunca
            if dto.quantity == 0 {
                log::warn!("⚠️ Línea {} llegó con cantidad 0, descartada", dto.id);
                continue;
            }
            let line = dto
                .into_line()
                .map_err(|e| OrderError::ServerRejected(format!("Respuesta inválida: {}", e)))?;
            lines.push(line);
        }

        log::info!("✅ Carrito sincronizado: {} líneas", lines.len());
        self.state.replace_snapshot(lines);
        Ok(())
    }
}
