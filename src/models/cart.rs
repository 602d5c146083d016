// ============================================================================
// MODELOS DE CARRITO - Snapshot autoritativo y sus derivados
// ============================================================================
// El snapshot es lo ÚNICO que la UI renderiza: se reemplaza entero con cada
// respuesta exitosa del backend, nunca se parchea a mano.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::utils::constants::DELIVERY_FEE_CENTS;
use crate::utils::money::format_cents;

/// Una línea del carrito, tal como la confirmó el backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// ID opaco de la línea, asignado por el backend
    pub id: String,
    /// ID opaco del plato
    pub food_item_id: String,
    pub name: String,
    /// Precio unitario en centavos
    pub unit_price_cents: u32,
    /// Siempre >= 1 mientras la línea exista; bajar a 0 es eliminarla
    pub quantity: u32,
    /// URL de imagen o token emoji ("🍖"), según lo que mande el backend
    pub image: Option<String>,
}

impl CartLine {
    pub fn line_total_cents(&self) -> u64 {
        self.unit_price_cents as u64 * self.quantity as u64
    }
}

/// Carrito completo como lo confirmó el backend por última vez
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Líneas en el orden que las devuelve el backend
    pub lines: Vec<CartLine>,
    /// Tarifa de entrega fija, en centavos
    pub delivery_fee_cents: u32,
}

impl Default for CartSnapshot {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            delivery_fee_cents: DELIVERY_FEE_CENTS,
        }
    }
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, line_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == line_id)
    }

    pub fn subtotal_cents(&self) -> u64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    pub fn total_cents(&self) -> u64 {
        self.subtotal_cents() + self.delivery_fee_cents as u64
    }

    /// Totales derivados; función pura, recalcula lo mismo en cada llamada
    pub fn totals(&self) -> Totals {
        Totals {
            subtotal_cents: self.subtotal_cents(),
            delivery_fee_cents: self.delivery_fee_cents,
            total_cents: self.total_cents(),
        }
    }
}

/// Totales derivados del snapshot actual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal_cents: u64,
    pub delivery_fee_cents: u32,
    pub total_cents: u64,
}

impl Totals {
    pub fn subtotal_display(&self) -> String {
        format_cents(self.subtotal_cents)
    }

    pub fn delivery_fee_display(&self) -> String {
        format_cents(self.delivery_fee_cents as u64)
    }

    pub fn total_display(&self) -> String {
        format_cents(self.total_cents)
    }
}

/// Mutación en vuelo hacia el backend; a lo sumo una por línea
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationIntent {
    SetQuantity { line_id: String, quantity: u32 },
    Remove { line_id: String },
    AddItem { food_item_id: String, quantity: u32 },
}

impl MutationIntent {
    /// Clave del mapa de vuelos: id de línea, o id de plato para altas
    pub fn flight_key(&self) -> &str {
        match self {
            MutationIntent::SetQuantity { line_id, .. } => line_id,
            MutationIntent::Remove { line_id } => line_id,
            MutationIntent::AddItem { food_item_id, .. } => food_item_id,
        }
    }
}
