// ============================================================================
// CHECKOUT VIEWMODEL - Un intento de checkout por instancia
// ============================================================================
// Congela el carrito al abrirse, junta la selección de método de pago y
// construye el OrderSummary que se entrega al colaborador de pago. Después
// del hand-off este coordinador queda cerrado: otro intento, otra instancia.
// ============================================================================

use uuid::Uuid;

use crate::error::OrderError;
use crate::models::cart::CartSnapshot;
use crate::models::order::{OrderSummary, PaymentMethod};
use crate::state::session_guard::SessionGuard;

/// Receptor del hand-off; desde acá el flujo es del colaborador de pago
pub type PaymentHandoff = Box<dyn Fn(&OrderSummary)>;

/// Coordinador del paso "proceder a pagar"
pub struct CheckoutViewModel {
    guard: SessionGuard,
    /// Carrito congelado al abrir el checkout
    snapshot: CartSnapshot,
    selection: Option<PaymentMethod>,
    completed: bool,
    on_handoff: PaymentHandoff,
}

impl std::fmt::Debug for CheckoutViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutViewModel")
            .field("snapshot", &self.snapshot)
            .field("selection", &self.selection)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

impl CheckoutViewModel {
    /// Abrir el paso de selección de pago. Con el carrito vacío no hay
    /// checkout; la selección arranca sin método elegido.
    pub fn begin(
        guard: SessionGuard,
        snapshot: CartSnapshot,
        on_handoff: PaymentHandoff,
    ) -> Result<Self, OrderError> {
        guard.ensure_active()?;
        if snapshot.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        Ok(Self {
            guard,
            snapshot,
            selection: None,
            completed: false,
            on_handoff,
        })
    }

    /// Elegir método de pago; idempotente, gana la última selección.
    /// No toca la red, pero con la sesión invalidada también falla rápido.
    pub fn select_method(&mut self, method: PaymentMethod) -> Result<(), OrderError> {
        self.guard.ensure_active()?;
        self.selection = Some(method);
        Ok(())
    }

    pub fn selection(&self) -> Option<PaymentMethod> {
        self.selection
    }

    /// Confirmar: construye el OrderSummary con el total fijado en este
    /// instante y lo entrega al colaborador de pago. Transición one-shot.
    pub fn confirm(&mut self) -> Result<OrderSummary, OrderError> {
        self.guard.ensure_active()?;
        if self.completed {
            return Err(OrderError::CheckoutClosed);
        }
        let method = self.selection.ok_or(OrderError::NoMethodSelected)?;

        let summary = OrderSummary {
            order_ref: Uuid::new_v4().to_string(),
            method,
            total_amount_cents: self.snapshot.total_cents(),
            lines: self.snapshot.lines.clone(),
            confirmed_at: chrono::Utc::now().timestamp(),
        };

        self.completed = true;
        log::info!(
            "💳 Orden {} confirmada: {} por {}",
            summary.order_ref,
            method.display_name(),
            summary.total_display()
        );
        (self.on_handoff)(&summary);

        Ok(summary)
    }

    /// Cancelar el intento: descarta la selección y vuelve al carrito.
    /// No toca la red.
    pub fn cancel(&mut self) {
        self.selection = None;
    }
}
