use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Wire-DTO: строка счёта (GET /invoices, POST /invoice)
// ============================================================================

/// Строка счёта бэкенда: связка «заказ — блюдо» плюс денормализованные
/// поля заказа. Одна строка — одно блюдо.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvoiceRow {
    #[serde(rename = "id_order")]
    pub order_id: i64,
    #[serde(rename = "id_dish")]
    pub dish_id: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(rename = "id_desk", deserialize_with = "string_or_number")]
    pub desk_id: String,
    #[serde(rename = "id_status")]
    pub status_code: String,
}

/// Номер стола бэкенд отдаёт то числом, то строкой
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

/// Привязка блюда к открытому заказу (POST /invoice)
#[derive(Debug, Clone, Serialize)]
pub struct AttachDishRequest {
    #[serde(rename = "id_order")]
    pub order_id: i64,
    #[serde(rename = "id_dish")]
    pub dish_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        let json = r#"{
            "id_order": 101,
            "id_dish": 2,
            "created_at": "2024-05-01T10:00:00Z",
            "id_desk": "5",
            "id_status": "Pending"
        }"#;

        let row: InvoiceRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.order_id, 101);
        assert_eq!(row.dish_id, 2);
        assert_eq!(row.desk_id, "5");
        assert_eq!(row.status_code, "Pending");
    }

    #[test]
    fn accepts_numeric_desk() {
        let json = r#"{"id_order": 1, "id_dish": 1, "id_desk": 5, "id_status": "Done"}"#;

        let row: InvoiceRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.desk_id, "5");
        assert_eq!(row.created_at, "");
    }

    #[test]
    fn attach_request_wire_names() {
        let request = AttachDishRequest {
            order_id: 101,
            dish_id: 3,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["id_order"], 101);
        assert_eq!(json["id_dish"], 3);
    }
}
