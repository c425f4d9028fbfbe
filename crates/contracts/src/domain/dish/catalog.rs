use std::collections::HashMap;

use super::aggregate::Dish;

// ============================================================================
// Каталог блюд сессии
// ============================================================================

/// Снимок меню для резолва названий блюд по идентификатору.
/// Порядок как в ответе бэкенда; идентификаторы в меню уникальны.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishCatalog {
    dishes: Vec<Dish>,
    by_id: HashMap<i64, usize>,
}

impl DishCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Заменить каталог целиком (загрузка меню, перезагрузка после добавления)
    pub fn set_all(&mut self, dishes: Vec<Dish>) {
        self.by_id = dishes
            .iter()
            .enumerate()
            .map(|(index, dish)| (dish.id, index))
            .collect();
        self.dishes = dishes;
    }

    pub fn get(&self, id: i64) -> Option<&Dish> {
        self.by_id.get(&id).map(|&index| &self.dishes[index])
    }

    /// Название блюда; для неизвестного идентификатора — заглушка,
    /// чтобы позиция заказа не пропадала из рендера.
    pub fn resolve_name(&self, id: i64) -> String {
        match self.get(id) {
            Some(dish) => dish.name.clone(),
            None => format!("Dish #{id}"),
        }
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: i64, name: &str) -> Dish {
        Dish {
            id,
            name: name.to_string(),
            description: String::new(),
            price: 1000.0,
            image: String::new(),
            category_id: 0,
        }
    }

    #[test]
    fn resolves_known_names() {
        let mut catalog = DishCatalog::new();
        catalog.set_all(vec![dish(1, "Big Mac"), dish(2, "Fries")]);

        assert_eq!(catalog.resolve_name(1), "Big Mac");
        assert_eq!(catalog.resolve_name(2), "Fries");
    }

    #[test]
    fn unknown_id_gets_placeholder_with_id() {
        let catalog = DishCatalog::new();
        let name = catalog.resolve_name(999);

        assert!(name.contains("999"));
        assert_eq!(name, "Dish #999");
    }

    #[test]
    fn set_all_replaces_and_keeps_order() {
        let mut catalog = DishCatalog::new();
        catalog.set_all(vec![dish(1, "Big Mac")]);
        catalog.set_all(vec![dish(3, "Cola"), dish(2, "Fries")]);

        let names: Vec<&str> = catalog.dishes().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Cola", "Fries"]);
        assert!(catalog.get(1).is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn empty_catalog_is_usable() {
        let catalog = DishCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get(1).is_none());
        assert_eq!(catalog.resolve_name(1), "Dish #1");
    }
}
