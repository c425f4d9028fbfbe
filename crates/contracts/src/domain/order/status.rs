use serde::{Deserialize, Serialize};

/// Статус заказа. Жизненный цикл строго вперёд:
/// pending → in_progress → completed.
///
/// Бэкенд хранит коды вразнобой ("Pending", "created", "InProgess", "Done");
/// незнакомый код сохраняется как есть в `Other` и не ломает рендер.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    /// Нераспознанный код бэкенда, пропущенный без изменений
    Other(String),
}

impl OrderStatus {
    /// Декодировать код статуса бэкенда.
    ///
    /// Помимо кодов самого бэкенда принимаются канонические snake_case
    /// формы: их пишет этот же дашборд (POST /order отправляет "pending"),
    /// без них собственные записи декодировались бы как `Other`.
    pub fn from_backend_code(code: &str) -> Self {
        match code {
            "Pending" | "created" | "pending" => OrderStatus::Pending,
            // "InProgess" — опечатка на стороне бэкенда, хранится именно так
            "InProgess" | "in_progress" => OrderStatus::InProgress,
            "Done" | "completed" => OrderStatus::Completed,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    /// Каноническое внутреннее имя статуса
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Other(code) => code,
        }
    }

    /// Код для записи в бэкенд (PUT /changestatus) — его собственный словарь
    pub fn as_backend_code(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "InProgess",
            OrderStatus::Completed => "Done",
            OrderStatus::Other(code) => code,
        }
    }

    /// Следующий статус жизненного цикла; `None` для терминального.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::InProgress),
            OrderStatus::InProgress => Some(OrderStatus::Completed),
            // completed терминален; Other в жизненном цикле не участвует
            OrderStatus::Completed | OrderStatus::Other(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// Подпись статуса для UI
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Other(_) => "Unknown",
        }
    }

    /// CSS-модификатор цветного индикатора статуса
    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-dot--pending",
            OrderStatus::InProgress => "status-dot--in-progress",
            OrderStatus::Completed => "status-dot--completed",
            OrderStatus::Other(_) => "status-dot--unknown",
        }
    }
}

impl From<String> for OrderStatus {
    fn from(code: String) -> Self {
        OrderStatus::from_backend_code(&code)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_moves_forward_only() {
        assert_eq!(
            OrderStatus::Pending.next(),
            Some(OrderStatus::InProgress)
        );
        assert_eq!(
            OrderStatus::InProgress.next(),
            Some(OrderStatus::Completed)
        );
        assert_eq!(OrderStatus::Completed.next(), None);
        assert!(OrderStatus::Completed.is_terminal());
    }

    #[test]
    fn unknown_code_has_no_successor() {
        let status = OrderStatus::from_backend_code("Cancelled");
        assert_eq!(status.next(), None);
        assert!(status.is_terminal());
    }

    #[test]
    fn decodes_backend_vocabulary() {
        assert_eq!(
            OrderStatus::from_backend_code("Pending"),
            OrderStatus::Pending
        );
        assert_eq!(
            OrderStatus::from_backend_code("created"),
            OrderStatus::Pending
        );
        // именно с опечаткой, как хранит бэкенд
        assert_eq!(
            OrderStatus::from_backend_code("InProgess"),
            OrderStatus::InProgress
        );
        assert_eq!(
            OrderStatus::from_backend_code("Done"),
            OrderStatus::Completed
        );
    }

    #[test]
    fn decodes_own_canonical_forms() {
        assert_eq!(
            OrderStatus::from_backend_code("pending"),
            OrderStatus::Pending
        );
        assert_eq!(
            OrderStatus::from_backend_code("in_progress"),
            OrderStatus::InProgress
        );
        assert_eq!(
            OrderStatus::from_backend_code("completed"),
            OrderStatus::Completed
        );
    }

    #[test]
    fn unknown_code_passes_through_verbatim() {
        let status = OrderStatus::from_backend_code("Refunded");
        assert_eq!(status, OrderStatus::Other("Refunded".to_string()));
        assert_eq!(status.as_str(), "Refunded");
        assert_eq!(status.as_backend_code(), "Refunded");
        assert_eq!(status.label(), "Unknown");
    }

    #[test]
    fn encodes_backend_vocabulary() {
        assert_eq!(OrderStatus::Pending.as_backend_code(), "Pending");
        assert_eq!(OrderStatus::InProgress.as_backend_code(), "InProgess");
        assert_eq!(OrderStatus::Completed.as_backend_code(), "Done");
    }

    #[test]
    fn serde_round_trip() {
        let decoded: OrderStatus = serde_json::from_str("\"Done\"").unwrap();
        assert_eq!(decoded, OrderStatus::Completed);

        let encoded = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(encoded, "\"in_progress\"");

        let opaque: OrderStatus = serde_json::from_str("\"Weird\"").unwrap();
        assert_eq!(serde_json::to_string(&opaque).unwrap(), "\"Weird\"");
    }
}
