pub mod constants;
pub mod money;
#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use constants::*;
pub use money::*;
