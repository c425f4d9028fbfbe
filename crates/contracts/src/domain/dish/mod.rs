//! Блюдо: справочник меню и каталог сессии для резолва названий.

pub mod aggregate;
pub mod catalog;

// Re-exports
pub use aggregate::{Dish, NewDishRequest};
pub use catalog::DishCatalog;
