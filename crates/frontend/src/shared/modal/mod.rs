use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::shared::icons::icon;

/// Модальное окно с заголовком и крестиком. Закрывается по Escape и по
/// клику в подложку; клики по содержимому окна не всплывают в подложку.
#[component]
pub fn Modal(title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    let keydown = StoredValue::new_local(Closure::<dyn FnMut(KeyboardEvent)>::new(
        move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                on_close.run(());
            }
        },
    ));
    keydown.with_value(|keydown| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        }
    });
    // Closure живёт до размонтирования, вместе со слушателем
    on_cleanup(move || {
        keydown.with_value(|keydown| {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    keydown.as_ref().unchecked_ref(),
                );
            }
        });
    });

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        class="button button--icon modal__close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
