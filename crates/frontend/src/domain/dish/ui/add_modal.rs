use contracts::domain::dish::NewDishRequest;
use leptos::prelude::*;

use crate::domain::dish::model;
use crate::session::SessionContext;
use crate::shared::modal::Modal;

/// Модальная форма нового блюда меню
#[component]
pub fn AddDishModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not provided in context");

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let handle_submit = move |_| {
        if is_submitting.get_untracked() {
            return;
        }

        let dto = NewDishRequest {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            price: price.get_untracked().trim().parse::<f64>().unwrap_or(0.0),
            image: image.get_untracked().trim().to_string(),
            category_id: category.get_untracked().trim().parse::<i64>().unwrap_or(0),
        };
        if let Err(e) = dto.validate() {
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(&e);
            }
            return;
        }

        set_is_submitting.set(true);
        set_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match model::create_dish(&dto).await {
                Ok(()) => {
                    // Бэкенд не возвращает созданное блюдо, меню перечитывается целиком
                    ctx.reload_catalog();
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Добавление блюда не прошло: {}", e);
                    set_error.set(Some(e));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Добавить блюдо".to_string() on_close=on_close>
            <div class="form">
                {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}

                <label class="form-field">
                    <span class="form-label">{"Название"}</span>
                    <input
                        type="text"
                        placeholder="Big Mac"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-field">
                    <span class="form-label">{"Цена"}</span>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-field">
                    <span class="form-label">{"Описание"}</span>
                    <textarea
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="form-field">
                    <span class="form-label">{"Картинка (URL)"}</span>
                    <input
                        type="text"
                        placeholder="https://..."
                        prop:value=move || image.get()
                        on:input=move |ev| set_image.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-field">
                    <span class="form-label">{"Категория (номер)"}</span>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                </label>

                <div class="form-actions">
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        {"Отмена"}
                    </button>
                    <button
                        class="button button--primary"
                        prop:disabled=move || is_submitting.get()
                        on:click=handle_submit
                    >
                        {move || if is_submitting.get() { "Сохранение..." } else { "Сохранить" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}
