use leptos::prelude::*;

use crate::session::SessionContext;
use crate::shared::icons::icon;

/// Шапка дашборда: заголовок, счётчик заказов и основные действия
#[component]
pub fn Header(on_create_order: Callback<()>, on_add_dish: Callback<()>) -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not provided in context");

    view! {
        <header class="app-header">
            <div class="app-header__title">
                <h1>{"Панель заказов"}</h1>
                <span class="app-header__count">
                    {move || format!("Всего заказов: {}", ctx.orders.with(|store| store.len()))}
                </span>
            </div>
            <div class="app-header__actions">
                <button
                    class="button button--secondary"
                    prop:disabled=move || ctx.is_loading.get()
                    on:click=move |_| ctx.load_session()
                >
                    {icon("refresh")}
                    {"Обновить"}
                </button>
                <button class="button button--secondary" on:click=move |_| on_add_dish.run(())>
                    {icon("plus")}
                    {"Добавить блюдо"}
                </button>
                <button class="button button--primary" on:click=move |_| on_create_order.run(())>
                    {icon("plus")}
                    {"Новый заказ"}
                </button>
            </div>
        </header>
    }
}
