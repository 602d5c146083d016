use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Leer un valor crudo de localStorage
pub fn read_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Eliminar una clave de localStorage
pub fn remove_item(key: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())
}
