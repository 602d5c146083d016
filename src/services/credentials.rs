// ============================================================================
// CREDENTIALS - Credencial bearer almacenada por el flujo de login
// ============================================================================
// El login/signup (fuera de este crate) deja el token en localStorage; acá
// sólo se consume y se borra. La capacidad se inyecta en el SessionGuard,
// sin estado global escondido.
// ============================================================================

/// Acceso a la credencial persistida
pub trait CredentialProvider {
    /// Token bearer almacenado, si hay sesión iniciada
    fn bearer_token(&self) -> Option<String>;

    /// Borrar la credencial persistida (invalidación de sesión)
    fn clear(&self);
}

/// Credencial respaldada por localStorage, con las claves que usa el login
#[cfg(target_arch = "wasm32")]
pub struct StorageCredentials;

#[cfg(target_arch = "wasm32")]
impl StorageCredentials {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for StorageCredentials {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialProvider for StorageCredentials {
    fn bearer_token(&self) -> Option<String> {
        crate::utils::storage::read_item(crate::utils::constants::TOKEN_STORAGE_KEY)
    }

    fn clear(&self) {
        use crate::utils::constants::{TOKEN_STORAGE_KEY, USER_DATA_STORAGE_KEY};
        use crate::utils::storage::remove_item;

        // El 401 del backend borra token Y datos de usuario, como el login los dejó
        if let Err(e) = remove_item(TOKEN_STORAGE_KEY) {
            log::warn!("⚠️ No se pudo borrar el token: {}", e);
        }
        if let Err(e) = remove_item(USER_DATA_STORAGE_KEY) {
            log::warn!("⚠️ No se pudieron borrar los datos de usuario: {}", e);
        }
    }
}
