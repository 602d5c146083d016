use serde::{Deserialize, Serialize};

use crate::models::cart::CartLine;
use crate::utils::money::format_cents;

/// Método de pago soportado por la app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Ebirr,
    Arifpay,
}

impl PaymentMethod {
    /// Nombre tal como se muestra en el selector de pago
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Ebirr => "E-birr",
            PaymentMethod::Arifpay => "Arif Pay",
        }
    }
}

/// Resumen inmutable que se entrega al colaborador de pago.
/// Se construye UNA vez por intento de checkout; un intento nuevo produce
/// un resumen nuevo con otra referencia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// Referencia de orden generada en el cliente (uuid v4)
    pub order_ref: String,
    pub method: PaymentMethod,
    /// Total fijado en el instante del confirm, en centavos
    pub total_amount_cents: u64,
    /// Copia de las líneas del snapshot al momento de proceder
    pub lines: Vec<CartLine>,
    /// Epoch en segundos del confirm
    pub confirmed_at: i64,
}

impl OrderSummary {
    pub fn total_display(&self) -> String {
        format_cents(self.total_amount_cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nombres_de_metodos_de_pago() {
        assert_eq!(PaymentMethod::Ebirr.display_name(), "E-birr");
        assert_eq!(PaymentMethod::Arifpay.display_name(), "Arif Pay");
    }

    #[test]
    fn metodo_serializa_en_minusculas() {
        let json = serde_json::to_string(&PaymentMethod::Ebirr).unwrap();
        assert_eq!(json, "\"ebirr\"");
        let back: PaymentMethod = serde_json::from_str("\"arifpay\"").unwrap();
        assert_eq!(back, PaymentMethod::Arifpay);
    }
}
