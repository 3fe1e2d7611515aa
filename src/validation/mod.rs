//! Checkout field validation rules

pub mod phone;

pub use phone::is_valid_bd_mobile;
