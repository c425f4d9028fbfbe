use serde::{Deserialize, Serialize};

// ============================================================================
// Агрегат: Блюдо (справочник меню)
// ============================================================================

/// Блюдо из меню ресторана, как его отдаёт GET /dishes.
/// Кроме идентификатора, названия и цены бэкенд ничего не гарантирует.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default, rename = "idcategory")]
    pub category_id: i64,
}

// ============================================================================
// Wire-DTO: добавление блюда (POST /dish)
// ============================================================================

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewDishRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    #[serde(rename = "idcategory")]
    pub category_id: i64,
}

impl NewDishRequest {
    /// Валидация формы перед отправкой
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Укажите название блюда".to_string());
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err("Укажите цену больше нуля".to_string());
        }
        Ok(())
    }
}
