// ============================================================================
// CART STATE - Espejo local del carrito + banderas de mutación en vuelo
// ============================================================================
// Único recurso mutable compartido del núcleo. Sólo el CartViewModel escribe
// acá; checkout y UI lo tratan como sólo-lectura.
// ============================================================================

use std::collections::HashMap;

use crate::error::OrderError;
use crate::models::cart::{CartLine, CartSnapshot, MutationIntent, Totals};
use crate::state::reactivity::Observable;
use crate::utils::constants::DELIVERY_FEE_CENTS;

/// Estado reactivo del carrito
#[derive(Clone)]
pub struct CartState {
    /// Snapshot autoritativo; se reemplaza entero, nunca se parchea
    snapshot: Observable<CartSnapshot>,
    /// Mutaciones en vuelo, una por clave (línea o plato)
    in_flight: Observable<HashMap<String, MutationIntent>>,
}

impl CartState {
    /// Carrito vacío al inicio de sesión; se puebla con el primer fetch
    pub fn new() -> Self {
        Self {
            snapshot: Observable::new(CartSnapshot::default()),
            in_flight: Observable::new(HashMap::new()),
        }
    }

    /// Copia del snapshot actual (lo que la UI renderiza)
    pub fn snapshot(&self) -> CartSnapshot {
        self.snapshot.get_cloned()
    }

    /// Suscribirse a reemplazos del snapshot
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.snapshot.subscribe(callback);
    }

    /// Suscribirse a cambios del conjunto de mutaciones en vuelo
    /// (para el indicador de "operación en curso" por línea)
    pub fn subscribe_pending<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.in_flight.subscribe(callback);
    }

    /// Reemplazar el snapshot con las líneas confirmadas por el backend
    pub fn replace_snapshot(&self, lines: Vec<CartLine>) {
        self.snapshot.set(CartSnapshot {
            lines,
            delivery_fee_cents: DELIVERY_FEE_CENTS,
        });
    }

    /// Descartar el snapshot (fin de sesión o unmount de la pantalla)
    pub fn clear(&self) {
        self.snapshot.set(CartSnapshot::default());
    }

    /// Totales del snapshot actual; disponibles aun con mutaciones en vuelo
    pub fn totals(&self) -> Totals {
        self.snapshot.with(|s| s.totals())
    }

    /// ¿Hay una mutación en vuelo para esta clave?
    pub fn is_pending(&self, key: &str) -> bool {
        self.in_flight.with(|m| m.contains_key(key))
    }

    /// Registrar un intento en vuelo. Segunda mutación sobre la misma clave
    /// → MutationInProgress, sin tocar la que ya está en curso.
    pub fn begin_mutation(&self, intent: MutationIntent) -> Result<(), OrderError> {
        let key = intent.flight_key().to_string();
        if self.is_pending(&key) {
            return Err(OrderError::MutationInProgress(key));
        }
        self.in_flight.update(|m| {
            m.insert(key, intent);
        });
        Ok(())
    }

    /// Limpiar la bandera al completar (éxito o fallo); el vuelo siempre
    /// corre hasta el final, no hay cancelación
    pub fn finish_mutation(&self, key: &str) {
        self.in_flight.update(|m| {
            m.remove(key);
        });
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
