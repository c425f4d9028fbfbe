use contracts::domain::order::Order;
use leptos::prelude::*;

use crate::domain::order::model;
use crate::session::SessionContext;
use crate::shared::modal::Modal;

/// ViewModel формы нового заказа
#[derive(Clone, Copy)]
pub struct CreateOrderViewModel {
    pub table: RwSignal<String>,
    pub selected_dish_ids: RwSignal<Vec<i64>>,
    pub error: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
}

impl CreateOrderViewModel {
    pub fn new() -> Self {
        Self {
            table: RwSignal::new(String::new()),
            selected_dish_ids: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }

    pub fn reset(&self) {
        self.table.set(String::new());
        self.selected_dish_ids.set(Vec::new());
        self.error.set(None);
        self.is_submitting.set(false);
    }

    /// Открыть заказ на бэкенде, привязать блюда и вставить его в список
    pub fn submit_command(&self, ctx: SessionContext, on_created: Callback<()>) {
        if self.is_submitting.get_untracked() {
            return;
        }

        let table_input = self.table.get_untracked();
        let dish_ids = self.selected_dish_ids.get_untracked();

        // Валидация формы до похода на бэкенд.
        // Номер стола уходит на бэкенд JSON-числом, нечисловой ввод отсекается здесь.
        let table = match table_input.trim().parse::<i64>() {
            Ok(table) if table > 0 => table,
            _ => {
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message("Укажите стол");
                }
                return;
            }
        };
        if dish_ids.is_empty() {
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message("Добавьте хотя бы одно блюдо");
            }
            return;
        }

        let this = *self;
        this.is_submitting.set(true);
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match create_on_backend(table, &dish_ids, ctx).await {
                Ok(order) => {
                    ctx.insert_order(order);
                    this.reset();
                    on_created.run(());
                }
                Err(e) => {
                    log::error!("Создание заказа не прошло: {}", e);
                    this.error.set(Some(e));
                    this.is_submitting.set(false);
                }
            }
        });
    }
}

/// POST /order, затем конкурентная привязка блюд.
/// Частичный отказ привязки оставляет заказ на бэкенде, локально
/// такой заказ не появляется.
async fn create_on_backend(
    table: i64,
    dish_ids: &[i64],
    ctx: SessionContext,
) -> Result<Order, String> {
    let order_id = model::create_order(table).await?;

    let attaches = dish_ids
        .iter()
        .map(|dish_id| model::attach_dish(order_id, *dish_id));
    let results = futures::future::join_all(attaches).await;
    let failed: Vec<String> = results.into_iter().filter_map(Result::err).collect();
    if !failed.is_empty() {
        return Err(format!(
            "Не все блюда привязаны к заказу: {}",
            failed.join("; ")
        ));
    }

    ctx.catalog.with_untracked(|catalog| {
        Order::new_with_id(order_id.to_string(), table.to_string(), dish_ids, catalog)
    })
}

/// Модальная форма нового заказа: номер стола и отметки блюд из меню
#[component]
pub fn CreateOrderModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not provided in context");
    let vm = CreateOrderViewModel::new();

    let table = vm.table;
    let selected = vm.selected_dish_ids;
    let error = vm.error;
    let is_submitting = vm.is_submitting;

    let handle_submit = move |_| {
        vm.submit_command(ctx, on_close);
    };

    view! {
        <Modal title="Новый заказ".to_string() on_close=on_close>
            <div class="form">
                {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}

                <label class="form-field">
                    <span class="form-label">{"Номер стола"}</span>
                    <input
                        type="number"
                        min="1"
                        placeholder="Например, 5"
                        prop:value=move || table.get()
                        on:input=move |ev| table.set(event_target_value(&ev))
                    />
                </label>

                <div class="form-field">
                    <span class="form-label">{"Блюда"}</span>
                    <div class="dish-options">
                        {move || {
                            let items = ctx.catalog.with(|catalog| catalog.dishes().to_vec());
                            if items.is_empty() {
                                view! {
                                    <div class="form-hint">
                                        {"Меню пусто, сначала добавьте блюдо"}
                                    </div>
                                }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|dish| {
                                        let dish_id = dish.id;
                                        view! {
                                            <label class="dish-option">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || {
                                                        selected.with(|ids| ids.contains(&dish_id))
                                                    }
                                                    on:change=move |_| {
                                                        selected
                                                            .update(|ids| {
                                                                match ids.iter().position(|d| *d == dish_id) {
                                                                    Some(pos) => {
                                                                        ids.remove(pos);
                                                                    }
                                                                    None => ids.push(dish_id),
                                                                }
                                                            })
                                                    }
                                                />
                                                <span class="dish-option__name">{dish.name.clone()}</span>
                                                <span class="dish-option__price">
                                                    {format!("{:.2}", dish.price)}
                                                </span>
                                            </label>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                    <span class="form-hint">
                        {move || format!("Выбрано позиций: {}", selected.with(|ids| ids.len()))}
                    </span>
                </div>

                <div class="form-actions">
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        {"Отмена"}
                    </button>
                    <button
                        class="button button--primary"
                        prop:disabled=move || is_submitting.get()
                        on:click=handle_submit
                    >
                        {move || if is_submitting.get() { "Создание..." } else { "Создать заказ" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}
