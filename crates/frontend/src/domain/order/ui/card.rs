use contracts::domain::order::{Order, OrderStatus};
use leptos::prelude::*;

use crate::session::SessionContext;
use crate::shared::date_utils::{format_datetime, format_time};
use crate::shared::icons::icon;

/// Карточка заказа: стол, статус, позиции счёта и действия.
/// Кнопка смены статуса скрыта у завершённых заказов.
#[component]
pub fn OrderCard(order: Order) -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not provided in context");

    let advance_label = match order.status {
        OrderStatus::Pending => "В работу",
        OrderStatus::InProgress => "Завершить",
        _ => "Далее",
    };
    // У неопознанного статуса кнопка остаётся, но перехода не будет
    let show_advance = order.status != OrderStatus::Completed;

    let time_short = if order.created_at.is_empty() {
        "—".to_string()
    } else {
        format_time(&order.created_at)
    };
    let time_full = format_datetime(&order.created_at);

    let advance_id = order.id.clone();
    let advance_busy_id = order.id.clone();
    let delete_id = order.id.clone();
    let delete_busy_id = order.id.clone();

    view! {
        <div class="order-card">
            <div class="order-card__header">
                <span class="order-card__table">
                    {icon("table")}
                    {format!("Стол {}", order.table)}
                </span>
                <span class="order-card__status">
                    <span class=format!("status-dot {}", order.status.css_class())></span>
                    {order.status.label()}
                </span>
            </div>
            <div class="order-card__meta">
                <span class="order-card__id">{format!("№ {}", order.id)}</span>
                <span class="order-card__time" title=time_full>
                    {time_short}
                </span>
            </div>
            <ul class="order-card__items">
                {order
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="order-card__item">
                                <span>{item.product_name.clone()}</span>
                                <span class="order-card__qty">{format!("x{}", item.quantity)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="order-card__actions">
                {show_advance
                    .then(|| {
                        view! {
                            <button
                                class="button button--primary"
                                prop:disabled=move || ctx.is_pending(&advance_busy_id)
                                on:click=move |_| ctx.advance_status(advance_id.clone())
                            >
                                {advance_label}
                                {icon("chevron-right")}
                            </button>
                        }
                    })}
                <button
                    class="button button--danger"
                    prop:disabled=move || ctx.is_pending(&delete_busy_id)
                    on:click=move |_| ctx.delete_order(delete_id.clone())
                >
                    {icon("trash")}
                    {"Удалить"}
                </button>
            </div>
        </div>
    }
}
