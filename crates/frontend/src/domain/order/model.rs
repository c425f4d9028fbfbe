use contracts::domain::invoice::{AttachDishRequest, InvoiceRow};
use contracts::domain::order::{CreateOrderRequest, OrderStatus};
use web_sys::{Request, RequestInit, RequestMode};

use crate::shared::api_utils::{api_url, fetch_with_timeout, response_text};

/// Все строки счетов (GET /invoices)
pub async fn fetch_invoices() -> Result<Vec<InvoiceRow>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = api_url("/invoices");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let resp = fetch_with_timeout(&request).await?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = response_text(&resp).await?;
    let data: Vec<InvoiceRow> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

/// Открыть заказ (POST /order), бэкенд выдаёт числовой идентификатор
pub async fn create_order(table: i64) -> Result<i64, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let dto = CreateOrderRequest::for_table(table);
    let body = serde_json::to_string(&dto).map_err(|e| format!("{e}"))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let url = api_url("/order");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let resp = fetch_with_timeout(&request).await?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = response_text(&resp).await?;
    parse_order_id(&text)
}

/// Идентификатор из ответа POST /order: объект с полем id либо голое число
fn parse_order_id(body: &str) -> Result<i64, String> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| format!("{e}"))?;
    value
        .get("id")
        .and_then(|id| id.as_i64())
        .or_else(|| value.as_i64())
        .ok_or_else(|| format!("В ответе нет идентификатора заказа: {}", body))
}

/// Привязать блюдо к открытому заказу (POST /invoice)
pub async fn attach_dish(order_id: i64, dish_id: i64) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let dto = AttachDishRequest { order_id, dish_id };
    let body = serde_json::to_string(&dto).map_err(|e| format!("{e}"))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let url = api_url("/invoice");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let resp = fetch_with_timeout(&request).await?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}

/// Сменить статус заказа (PUT /changestatus/{id}/{status}).
/// В URL идёт словарь кодов бэкенда, включая его опечатку в InProgess.
pub async fn change_status(order_id: &str, status: &OrderStatus) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("PUT");
    opts.set_mode(RequestMode::Cors);

    let url = api_url(&format!(
        "/changestatus/{}/{}",
        order_id,
        status.as_backend_code()
    ));
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let resp = fetch_with_timeout(&request).await?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}

/// Удалить позицию счёта (DELETE /invoice/dish/{order}/{dish})
pub async fn delete_invoice_item(order_id: &str, dish_id: &str) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let url = api_url(&format!("/invoice/dish/{}/{}", order_id, dish_id));
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let resp = fetch_with_timeout(&request).await?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_order_id;

    #[test]
    fn order_id_from_object() {
        assert_eq!(parse_order_id(r#"{"id": 42}"#).unwrap(), 42);
    }

    #[test]
    fn order_id_from_bare_number() {
        assert_eq!(parse_order_id("42").unwrap(), 42);
    }

    #[test]
    fn missing_id_is_an_error() {
        assert!(parse_order_id(r#"{"status": "ok"}"#).is_err());
        assert!(parse_order_id("not json").is_err());
    }
}
