pub mod cart;
pub mod order;

pub use cart::*;
pub use order::*;
