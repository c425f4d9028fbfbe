use contracts::domain::order::OrderTab;
use leptos::prelude::*;

use crate::session::SessionContext;

/// Минимальный горизонтальный сдвиг пальца, засчитываемый как свайп
const SWIPE_MIN_DISTANCE_PX: i32 = 50;

/// Полоса вкладок фильтра списка заказов.
/// Вкладка выбирается кнопкой либо горизонтальным свайпом по полосе:
/// свайп влево листает к следующей вкладке, вправо — к предыдущей.
#[component]
pub fn TabsSelector() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not provided in context");

    let swipe_start_x = RwSignal::new(None::<i32>);

    let on_touch_start = move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            swipe_start_x.set(Some(touch.client_x()));
        }
    };
    let on_touch_end = move |ev: web_sys::TouchEvent| {
        let start_x = match swipe_start_x.get_untracked() {
            Some(x) => x,
            None => return,
        };
        swipe_start_x.set(None);
        let end_x = match ev.changed_touches().get(0) {
            Some(touch) => touch.client_x(),
            None => return,
        };

        let delta = end_x - start_x;
        if delta.abs() < SWIPE_MIN_DISTANCE_PX {
            return;
        }
        let current = ctx.selected_tab.get_untracked();
        let target = if delta < 0 {
            current.next()
        } else {
            current.previous()
        };
        // На крайних вкладках свайп упирается в край полосы
        if target != current {
            ctx.select_tab(target);
        }
    };

    view! {
        <div class="tabs-selector" on:touchstart=on_touch_start on:touchend=on_touch_end>
            {OrderTab::ALL
                .iter()
                .map(|tab| {
                    let tab = *tab;
                    view! {
                        <button
                            class=move || {
                                if ctx.selected_tab.get() == tab {
                                    "tab tab--active"
                                } else {
                                    "tab"
                                }
                            }
                            on:click=move |_| ctx.select_tab(tab)
                        >
                            {tab.name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
