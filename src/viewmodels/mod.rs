pub mod cart_viewmodel;
pub mod checkout_viewmodel;

pub use cart_viewmodel::CartViewModel;
pub use checkout_viewmodel::{CheckoutViewModel, PaymentHandoff};
