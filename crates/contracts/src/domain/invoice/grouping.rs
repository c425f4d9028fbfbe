use std::collections::HashMap;

use super::row::InvoiceRow;
use crate::domain::dish::DishCatalog;
use crate::domain::order::{Order, OrderItem, OrderStatus};

// ============================================================================
// Сворачивание строк счетов в заказы
// ============================================================================

/// Собрать заказы из плоских строк счетов за один проход.
///
/// Заказ появляется при первой встреченной строке с его идентификатором,
/// и только она задаёт стол, статус и время создания. Последующие строки
/// того же заказа лишь добавляют позиции, даже если их денормализованные
/// поля расходятся с первой строкой. Порядок заказов — порядок первого
/// появления, порядок позиций — порядок строк.
pub fn group_rows(rows: &[InvoiceRow], catalog: &DishCatalog) -> Vec<Order> {
    let mut orders: Vec<Order> = Vec::new();
    let mut index_by_id: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let index = match index_by_id.get(&row.order_id) {
            Some(&index) => index,
            None => {
                orders.push(Order {
                    id: row.order_id.to_string(),
                    table: row.desk_id.clone(),
                    status: OrderStatus::from_backend_code(&row.status_code),
                    created_at: row.created_at.clone(),
                    items: Vec::new(),
                });
                index_by_id.insert(row.order_id, orders.len() - 1);
                orders.len() - 1
            }
        };

        orders[index].items.push(OrderItem::new(
            row.dish_id.to_string(),
            catalog.resolve_name(row.dish_id),
        ));
    }

    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dish::Dish;

    fn row(order_id: i64, dish_id: i64, created_at: &str, desk: &str, status: &str) -> InvoiceRow {
        InvoiceRow {
            order_id,
            dish_id,
            created_at: created_at.to_string(),
            desk_id: desk.to_string(),
            status_code: status.to_string(),
        }
    }

    fn catalog() -> DishCatalog {
        let mut catalog = DishCatalog::new();
        catalog.set_all(vec![
            Dish {
                id: 1,
                name: "Big Mac".to_string(),
                description: String::new(),
                price: 15000.0,
                image: String::new(),
                category_id: 0,
            },
            Dish {
                id: 2,
                name: "Fries".to_string(),
                description: String::new(),
                price: 3000.0,
                image: String::new(),
                category_id: 0,
            },
            Dish {
                id: 3,
                name: "Cola".to_string(),
                description: String::new(),
                price: 2500.0,
                image: String::new(),
                category_id: 0,
            },
        ]);
        catalog
    }

    #[test]
    fn groups_rows_into_orders_first_seen_order() {
        let rows = vec![
            row(101, 1, "2024-05-01T10:00:00Z", "5", "Pending"),
            row(101, 2, "2024-05-01T10:00:00Z", "5", "Pending"),
            row(102, 3, "2024-05-01T10:05:00Z", "3", "InProgess"),
        ];

        let orders = group_rows(&rows, &catalog());

        assert_eq!(orders.len(), 2);

        let first = &orders[0];
        assert_eq!(first.id, "101");
        assert_eq!(first.table, "5");
        assert_eq!(first.status, OrderStatus::Pending);
        assert_eq!(first.created_at, "2024-05-01T10:00:00Z");
        let names: Vec<&str> = first.items.iter().map(|i| i.product_name.as_str()).collect();
        assert_eq!(names, vec!["Big Mac", "Fries"]);
        assert!(first.items.iter().all(|i| i.quantity == 1));

        let second = &orders[1];
        assert_eq!(second.id, "102");
        assert_eq!(second.table, "3");
        assert_eq!(second.status, OrderStatus::InProgress);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].product_id, "3");
    }

    #[test]
    fn first_row_wins_order_fields() {
        let rows = vec![
            row(7, 1, "2024-05-01T10:00:00Z", "5", "Pending"),
            // расхождение денормализованных полей в поздней строке
            row(7, 2, "2024-05-01T12:00:00Z", "9", "Done"),
        ];

        let orders = group_rows(&rows, &catalog());

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].table, "5");
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[0].created_at, "2024-05-01T10:00:00Z");
        assert_eq!(orders[0].items.len(), 2);
    }

    #[test]
    fn repeated_dish_stays_as_separate_rows() {
        let rows = vec![
            row(7, 1, "", "5", "Pending"),
            row(7, 1, "", "5", "Pending"),
        ];

        let orders = group_rows(&rows, &catalog());

        assert_eq!(orders[0].items.len(), 2);
        assert!(orders[0].items.iter().all(|i| i.quantity == 1));
    }

    #[test]
    fn unknown_dish_gets_placeholder_name() {
        let rows = vec![row(7, 999, "", "5", "Pending")];

        let orders = group_rows(&rows, &catalog());
        assert!(orders[0].items[0].product_name.contains("999"));
    }

    #[test]
    fn empty_input_yields_no_orders() {
        let orders = group_rows(&[], &catalog());
        assert!(orders.is_empty());
    }
}
