use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dish::DishCatalog;

use super::status::OrderStatus;

// ============================================================================
// Агрегат: Заказ
// ============================================================================

/// Позиция заказа. Количество всегда 1: каждая строка счёта на бэкенде
/// соответствует одному блюду, слияния одинаковых блюд нет.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(product_id: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity: 1,
        }
    }
}

/// Заказ на дашборде: стол, статус, время создания и список позиций.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub table: String,
    pub status: OrderStatus,
    pub created_at: String,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Новый заказ с локальным идентификатором (uuid v4)
    pub fn new_for_insert(
        table: impl Into<String>,
        dish_ids: &[i64],
        catalog: &DishCatalog,
    ) -> Result<Self, String> {
        Self::new_with_id(Uuid::new_v4().to_string(), table, dish_ids, catalog)
    }

    /// Новый заказ с идентификатором, выданным бэкендом.
    /// Позиции собираются по выбранным блюдам, названия берутся из каталога.
    pub fn new_with_id(
        id: impl Into<String>,
        table: impl Into<String>,
        dish_ids: &[i64],
        catalog: &DishCatalog,
    ) -> Result<Self, String> {
        let items = dish_ids
            .iter()
            .map(|&dish_id| OrderItem::new(dish_id.to_string(), catalog.resolve_name(dish_id)))
            .collect();
        let order = Self {
            id: id.into(),
            table: table.into(),
            status: OrderStatus::Pending,
            created_at: Utc::now().to_rfc3339(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    /// Валидация перед вставкой в хранилище
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Идентификатор заказа не может быть пустым".to_string());
        }
        if self.table.trim().is_empty() {
            return Err("Укажите стол".to_string());
        }
        if self.items.is_empty() {
            return Err("Добавьте хотя бы одно блюдо".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Wire-DTO: создание заказа (POST /order)
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    /// Номер стола: бэкенд ждёт JSON-число, не строку
    #[serde(rename = "id_desk")]
    pub desk_id: i64,
    #[serde(rename = "id_status")]
    pub status: String,
}

impl CreateOrderRequest {
    /// Тело запроса на открытие заказа; новый заказ всегда pending
    pub fn for_table(table: i64) -> Self {
        Self {
            desk_id: table,
            status: OrderStatus::Pending.as_str().to_string(),
        }
    }
}
