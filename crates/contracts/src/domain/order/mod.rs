//! Заказ: агрегат с позициями, жизненный цикл статусов, рабочее
//! хранилище сессии и вкладки фильтра.

pub mod aggregate;
pub mod status;
pub mod store;
pub mod tabs;

// Re-exports
pub use aggregate::{CreateOrderRequest, Order, OrderItem};
pub use status::OrderStatus;
pub use store::OrderStore;
pub use tabs::{filter_by_tab, OrderTab};
