use serde::{Deserialize, Serialize};

use super::aggregate::Order;
use super::status::OrderStatus;

// ============================================================================
// Вкладки фильтра списка заказов
// ============================================================================

/// Вкладка фильтра. Незнакомое имя (битый URL, старая ссылка)
/// разрешается в `All`: фильтр лучше раскрыть, чем спрятать заказы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderTab {
    All,
    Pending,
    InProgress,
    Completed,
}

impl OrderTab {
    /// Все вкладки в порядке отображения
    pub const ALL: [OrderTab; 4] = [
        OrderTab::All,
        OrderTab::Pending,
        OrderTab::InProgress,
        OrderTab::Completed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OrderTab::All => "All",
            OrderTab::Pending => "Pending",
            OrderTab::InProgress => "In Progress",
            OrderTab::Completed => "Completed",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "Pending" => OrderTab::Pending,
            "In Progress" => OrderTab::InProgress,
            "Completed" => OrderTab::Completed,
            _ => OrderTab::All,
        }
    }

    /// Попадает ли заказ с данным статусом на вкладку
    pub fn matches(&self, status: &OrderStatus) -> bool {
        match self {
            OrderTab::All => true,
            OrderTab::Pending => *status == OrderStatus::Pending,
            OrderTab::InProgress => *status == OrderStatus::InProgress,
            OrderTab::Completed => *status == OrderStatus::Completed,
        }
    }

    /// Следующая вкладка в порядке отображения; последняя остаётся на месте
    pub fn next(&self) -> OrderTab {
        let idx = self.position();
        OrderTab::ALL[(idx + 1).min(OrderTab::ALL.len() - 1)]
    }

    /// Предыдущая вкладка в порядке отображения; первая остаётся на месте
    pub fn previous(&self) -> OrderTab {
        OrderTab::ALL[self.position().saturating_sub(1)]
    }

    fn position(&self) -> usize {
        OrderTab::ALL
            .iter()
            .position(|tab| tab == self)
            .unwrap_or(0)
    }
}

impl Default for OrderTab {
    fn default() -> Self {
        OrderTab::All
    }
}

impl From<String> for OrderTab {
    fn from(name: String) -> Self {
        OrderTab::from_name(&name)
    }
}

impl From<OrderTab> for String {
    fn from(tab: OrderTab) -> Self {
        tab.name().to_string()
    }
}

/// Отфильтровать заказы по вкладке, порядок исходного списка сохраняется
pub fn filter_by_tab(orders: &[Order], tab: OrderTab) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| tab.matches(&o.status))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::aggregate::OrderItem;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            table: "1".to_string(),
            status,
            created_at: String::new(),
            items: vec![OrderItem::new("1", "Big Mac")],
        }
    }

    #[test]
    fn all_tab_is_identity() {
        let orders = vec![
            order("1", OrderStatus::Pending),
            order("2", OrderStatus::Completed),
            order("3", OrderStatus::Other("Weird".to_string())),
        ];

        let filtered = filter_by_tab(&orders, OrderTab::All);
        assert_eq!(filtered, orders);
    }

    #[test]
    fn pending_tab_keeps_only_pending() {
        let orders = vec![
            order("1", OrderStatus::Pending),
            order("2", OrderStatus::InProgress),
            order("3", OrderStatus::Pending),
        ];

        let filtered = filter_by_tab(&orders, OrderTab::Pending);
        let ids: Vec<&str> = filtered.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn unknown_status_matches_no_specific_tab() {
        let status = OrderStatus::Other("Refunded".to_string());

        assert!(OrderTab::All.matches(&status));
        assert!(!OrderTab::Pending.matches(&status));
        assert!(!OrderTab::InProgress.matches(&status));
        assert!(!OrderTab::Completed.matches(&status));
    }

    #[test]
    fn from_name_falls_open_to_all() {
        assert_eq!(OrderTab::from_name("In Progress"), OrderTab::InProgress);
        assert_eq!(OrderTab::from_name("Archive"), OrderTab::All);
        assert_eq!(OrderTab::from_name(""), OrderTab::All);
    }

    #[test]
    fn display_order_is_stable() {
        let names: Vec<&str> = OrderTab::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["All", "Pending", "In Progress", "Completed"]);
    }

    #[test]
    fn neighbours_follow_display_order() {
        assert_eq!(OrderTab::All.next(), OrderTab::Pending);
        assert_eq!(OrderTab::Pending.next(), OrderTab::InProgress);
        assert_eq!(OrderTab::InProgress.previous(), OrderTab::Pending);
        assert_eq!(OrderTab::Pending.previous(), OrderTab::All);
    }

    #[test]
    fn neighbours_clamp_at_the_edges() {
        assert_eq!(OrderTab::All.previous(), OrderTab::All);
        assert_eq!(OrderTab::Completed.next(), OrderTab::Completed);
    }

    #[test]
    fn serde_uses_display_names() {
        let encoded = serde_json::to_string(&OrderTab::InProgress).unwrap();
        assert_eq!(encoded, "\"In Progress\"");

        let decoded: OrderTab = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(decoded, OrderTab::Pending);

        let fallback: OrderTab = serde_json::from_str("\"Bogus\"").unwrap();
        assert_eq!(fallback, OrderTab::All);
    }
}
