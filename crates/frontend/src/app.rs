use leptos::prelude::*;

use crate::domain::dish::ui::AddDishModal;
use crate::domain::order::ui::{CreateOrderModal, OrderList, TabsSelector};
use crate::layout::{Header, Notices};
use crate::session::SessionContext;

#[component]
pub fn App() -> impl IntoView {
    // Контекст сессии раздаётся всему приложению
    let ctx = SessionContext::new();
    provide_context(ctx);

    ctx.init_url_sync();
    ctx.load_session();

    let (show_create_order, set_show_create_order) = signal(false);
    let (show_add_dish, set_show_add_dish) = signal(false);

    let open_create_order = Callback::new(move |_: ()| set_show_create_order.set(true));
    let close_create_order = Callback::new(move |_: ()| set_show_create_order.set(false));
    let open_add_dish = Callback::new(move |_: ()| set_show_add_dish.set(true));
    let close_add_dish = Callback::new(move |_: ()| set_show_add_dish.set(false));

    view! {
        <div class="dashboard">
            <Header on_create_order=open_create_order on_add_dish=open_add_dish />
            <Notices />
            <TabsSelector />
            <OrderList />

            {move || {
                show_create_order
                    .get()
                    .then(|| view! { <CreateOrderModal on_close=close_create_order /> })
            }}
            {move || {
                show_add_dish.get().then(|| view! { <AddDishModal on_close=close_add_dish /> })
            }}
        </div>
    }
}
