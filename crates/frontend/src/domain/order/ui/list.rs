use contracts::domain::order::{filter_by_tab, OrderTab};
use leptos::prelude::*;

use super::card::OrderCard;
use crate::session::SessionContext;

/// Список заказов активной вкладки
#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not provided in context");

    let filtered_orders = move || {
        let tab = ctx.selected_tab.get();
        ctx.orders.with(|store| filter_by_tab(store.orders(), tab))
    };

    view! {
        <div class="order-list">
            {move || {
                if ctx.is_loading.get() {
                    return view! {
                        <div class="order-list__empty">{"⏳ Загрузка..."}</div>
                    }
                        .into_any();
                }
                let orders = filtered_orders();
                if orders.is_empty() {
                    let text = match ctx.selected_tab.get() {
                        OrderTab::All => "Заказов пока нет".to_string(),
                        tab => format!("Нет заказов на вкладке «{}»", tab.name()),
                    };
                    view! { <div class="order-list__empty">{text}</div> }.into_any()
                } else {
                    view! {
                        <div class="order-list__grid">
                            {orders
                                .into_iter()
                                .map(|order| view! { <OrderCard order=order /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
