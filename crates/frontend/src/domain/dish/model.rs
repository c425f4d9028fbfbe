use contracts::domain::dish::{Dish, NewDishRequest};
use web_sys::{Request, RequestInit, RequestMode};

use crate::shared::api_utils::{api_url, fetch_with_timeout, response_text};

/// Всё меню (GET /dishes)
pub async fn fetch_dishes() -> Result<Vec<Dish>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = api_url("/dishes");
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
    let data: Vec<Dish> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

/// Добавить блюдо в меню (POST /dish)
pub async fn create_dish(dto: &NewDishRequest) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let body = serde_json::to_string(dto).map_err(|e| format!("{e}"))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let url = api_url("/dish");
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
