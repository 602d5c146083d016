/// URL base del backend de pedidos
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000 (por defecto)
/// - Dispositivo real: la IP de la máquina que corre el backend (via BACKEND_URL)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Tarifa de entrega fija, en centavos ($2.99)
pub const DELIVERY_FEE_CENTS: u32 = 299;

/// Clave de localStorage donde el flujo de login deja el token bearer
pub const TOKEN_STORAGE_KEY: &str = "userToken";

/// Clave de localStorage con los datos del usuario logueado
pub const USER_DATA_STORAGE_KEY: &str = "userData";
