// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP al servicio de carrito.
// Contrato:
//   GET    /api/cart            → carrito completo autoritativo
//   POST   /api/cart            → agrega {foodItemId, quantity}, devuelve carrito
//   PUT    /api/cart/{lineId}   → actualiza {quantity}, devuelve carrito
//   DELETE /api/cart/{lineId}   → sólo éxito/fallo
// Toda llamada lleva el bearer token; 401 es la señal de sesión inválida.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::cart::CartLine;
use crate::utils::money::parse_price_cents;

/// Error de la capa HTTP del carrito
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// La request no llegó a resolverse (sin red, DNS, abort del transporte)
    NetworkUnavailable(String),
    /// El backend rechazó la credencial; lo procesa el SessionGuard
    Unauthorized,
    /// El backend respondió con un rechazo; el mensaje va verbatim a la UI
    ServerRejected(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NetworkUnavailable(detail) => write!(f, "Network error: {}", detail),
            ApiError::Unauthorized => write!(f, "Credencial rechazada por el backend"),
            ApiError::ServerRejected(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Transporte hacia el servicio remoto de carrito. El núcleo sólo conoce
/// este contrato; la implementación real usa gloo-net en wasm.
/// Los futures son !Send: acá todo vive en el hilo único del event loop.
#[allow(async_fn_in_trait)]
pub trait CartTransport {
    /// GET /api/cart
    async fn fetch_cart(&self) -> Result<Vec<CartLineDto>, ApiError>;

    /// POST /api/cart
    async fn add_item(&self, food_item_id: &str, quantity: u32)
        -> Result<Vec<CartLineDto>, ApiError>;

    /// PUT /api/cart/{line_id} — quantity siempre >= 1, el caller ya
    /// tradujo cantidades menores a un delete
    async fn update_line(&self, line_id: &str, quantity: u32)
        -> Result<Vec<CartLineDto>, ApiError>;

    /// DELETE /api/cart/{line_id}
    async fn delete_line(&self, line_id: &str) -> Result<(), ApiError>;
}

/// Línea de carrito tal como viaja por el wire (precio como string decimal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineDto {
    pub id: String,
    #[serde(rename = "foodItemId")]
    pub food_item_id: String,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<String>,
}

impl CartLineDto {
    /// Convertir al modelo interno, parseando el precio a centavos
    pub fn into_line(self) -> Result<CartLine, String> {
        let unit_price_cents = parse_price_cents(&self.price)
            .map_err(|e| format!("Línea {}: {}", self.id, e))?;
        Ok(CartLine {
            id: self.id,
            food_item_id: self.food_item_id,
            name: self.name,
            unit_price_cents,
            quantity: self.quantity,
            image: self.image,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CartResponse {
    pub items: Vec<CartLineDto>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Mensaje de rechazo: el campo "message" del body si es JSON, si no el crudo
pub fn rejection_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message {
            return message;
        }
    }
    format!("HTTP {}: {}", status, body)
}

#[cfg(target_arch = "wasm32")]
mod gloo_client {
    use std::rc::Rc;

    use gloo_net::http::{Request, RequestBuilder, Response};

    use super::*;
    use crate::services::credentials::CredentialProvider;
    use crate::utils::constants::BACKEND_URL;

    #[derive(Serialize)]
    struct AddItemRequest<'a> {
        #[serde(rename = "foodItemId")]
        food_item_id: &'a str,
        quantity: u32,
    }

    #[derive(Serialize)]
    struct UpdateLineRequest {
        quantity: u32,
    }

    /// Cliente del servicio de carrito sobre gloo-net
    #[derive(Clone)]
    pub struct ApiClient {
        base_url: String,
        credentials: Rc<dyn CredentialProvider>,
    }

    impl ApiClient {
        pub fn new(credentials: Rc<dyn CredentialProvider>) -> Self {
            Self::with_base_url(BACKEND_URL.to_string(), credentials)
        }

        pub fn with_base_url(base_url: String, credentials: Rc<dyn CredentialProvider>) -> Self {
            Self {
                base_url,
                credentials,
            }
        }

        /// Adjuntar el bearer token; sin token almacenado no hay sesión
        fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
            let token = self
                .credentials
                .bearer_token()
                .ok_or(ApiError::Unauthorized)?;
            Ok(builder.header("Authorization", &format!("Bearer {}", token)))
        }

        /// 401 → Unauthorized; cualquier otro status no-ok → ServerRejected
        async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
            if response.status() == 401 {
                return Err(ApiError::Unauthorized);
            }
            if !response.ok() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(ApiError::ServerRejected(rejection_message(status, &body)));
            }
            Ok(response)
        }

        async fn parse_cart(response: Response) -> Result<Vec<CartLineDto>, ApiError> {
            let status = response.status();
            let cart = response.json::<CartResponse>().await.map_err(|e| {
                ApiError::ServerRejected(format!("Respuesta inválida del backend ({}): {}", status, e))
            })?;
            Ok(cart.items)
        }
    }

    impl CartTransport for ApiClient {
        async fn fetch_cart(&self) -> Result<Vec<CartLineDto>, ApiError> {
            let url = format!("{}/api/cart", self.base_url);
            let response = self
                .authorized(Request::get(&url))?
                .send()
                .await
                .map_err(|e| ApiError::NetworkUnavailable(format!("{}", e)))?;

            Self::parse_cart(Self::ensure_ok(response).await?).await
        }

        async fn add_item(
            &self,
            food_item_id: &str,
            quantity: u32,
        ) -> Result<Vec<CartLineDto>, ApiError> {
            let url = format!("{}/api/cart", self.base_url);
            log::info!("🛒 Agregando {} x{} al carrito", food_item_id, quantity);

            let response = self
                .authorized(Request::post(&url))?
                .json(&AddItemRequest {
                    food_item_id,
                    quantity,
                })
                .map_err(|e| ApiError::NetworkUnavailable(format!("Request build error: {}", e)))?
                .send()
                .await
                .map_err(|e| ApiError::NetworkUnavailable(format!("{}", e)))?;

            Self::parse_cart(Self::ensure_ok(response).await?).await
        }

        async fn update_line(
            &self,
            line_id: &str,
            quantity: u32,
        ) -> Result<Vec<CartLineDto>, ApiError> {
            let url = format!("{}/api/cart/{}", self.base_url, line_id);
            log::info!("🛒 Actualizando línea {} a cantidad {}", line_id, quantity);

            let response = self
                .authorized(Request::put(&url))?
                .json(&UpdateLineRequest { quantity })
                .map_err(|e| ApiError::NetworkUnavailable(format!("Request build error: {}", e)))?
                .send()
                .await
                .map_err(|e| ApiError::NetworkUnavailable(format!("{}", e)))?;

            Self::parse_cart(Self::ensure_ok(response).await?).await
        }

        async fn delete_line(&self, line_id: &str) -> Result<(), ApiError> {
            let url = format!("{}/api/cart/{}", self.base_url, line_id);
            log::info!("🗑️ Eliminando línea {} del carrito", line_id);

            let response = self
                .authorized(Request::delete(&url))?
                .send()
                .await
                .map_err(|e| ApiError::NetworkUnavailable(format!("{}", e)))?;

            Self::ensure_ok(response).await?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use gloo_client::ApiClient;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_convierte_a_linea_interna() {
        let dto = CartLineDto {
            id: "a".into(),
            food_item_id: "food-1".into(),
            name: "Animal food".into(),
            price: "25.00".into(),
            quantity: 1,
            image: Some("🍖".into()),
        };

        let line = dto.into_line().unwrap();
        assert_eq!(line.unit_price_cents, 2500);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.image.as_deref(), Some("🍖"));
    }

    #[test]
    fn dto_con_precio_roto_falla() {
        let dto = CartLineDto {
            id: "a".into(),
            food_item_id: "food-1".into(),
            name: "Animal food".into(),
            price: "not-a-price".into(),
            quantity: 1,
            image: None,
        };

        let err = dto.into_line().unwrap_err();
        assert!(err.contains("Línea a"));
    }

    #[test]
    fn deserializa_el_formato_del_wire() {
        let json = r#"{
            "items": [
                {"id": "1", "foodItemId": "9", "name": "Sugar Bugs", "price": "12.50", "quantity": 2}
            ]
        }"#;

        let cart: CartResponse = serde_json::from_str(json).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].food_item_id, "9");
        assert_eq!(cart.items[0].image, None);
    }

    #[test]
    fn mensaje_de_rechazo_prefiere_el_campo_message() {
        let body = r#"{"message": "Food item is not available"}"#;
        assert_eq!(rejection_message(400, body), "Food item is not available");
        assert_eq!(
            rejection_message(500, "boom"),
            "HTTP 500: boom"
        );
    }
}
