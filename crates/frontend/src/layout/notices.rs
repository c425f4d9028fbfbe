use leptos::prelude::*;

use crate::session::{NoticeKind, SessionContext};
use crate::shared::icons::icon;

/// Лента уведомлений под шапкой; каждое закрывается вручную
#[component]
pub fn Notices() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not provided in context");

    view! {
        <div class="notices">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id.clone()
                children=move |notice| {
                    let id = notice.id.clone();
                    let class = match notice.kind {
                        NoticeKind::Error => "notice notice--error",
                        NoticeKind::Info => "notice notice--info",
                    };
                    view! {
                        <div class=class>
                            <span class="notice__text">{notice.message.clone()}</span>
                            <button class="notice__close" on:click=move |_| ctx.dismiss_notice(&id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
