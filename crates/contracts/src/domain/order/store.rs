use super::aggregate::Order;
use super::status::OrderStatus;

// ============================================================================
// Рабочее хранилище заказов сессии
// ============================================================================

/// Заказы текущей сессии в порядке вставки. Хранилище — единственный
/// владелец списка; UI получает срез и никогда не мутирует его напрямую.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Заменить всё содержимое (первичная загрузка, полная перезагрузка)
    pub fn set_all(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// Добавить заказ в конец. Коллизия идентификаторов отклоняется:
    /// хранилище не меняется, возврат `false`.
    pub fn add(&mut self, order: Order) -> bool {
        if self.orders.iter().any(|o| o.id == order.id) {
            return false;
        }
        self.orders.push(order);
        true
    }

    /// Сменить статус заказа на месте, позиция в списке сохраняется.
    /// Неизвестный идентификатор — no-op, возврат `false`.
    pub fn update_status(&mut self, id: &str, status: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.status = status;
                true
            }
            None => false,
        }
    }

    /// Удалить заказ. Неизвестный идентификатор — no-op, возврат `false`.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        self.orders.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
