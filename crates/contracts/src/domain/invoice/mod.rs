//! Счёт: строки «заказ-блюдо» бэкенда и их сворачивание в заказы.

pub mod grouping;
pub mod row;

// Re-exports
pub use grouping::group_rows;
pub use row::{AttachDishRequest, InvoiceRow};
