use std::collections::HashMap;
use std::collections::HashSet;

use contracts::domain::dish::DishCatalog;
use contracts::domain::invoice::group_rows;
use contracts::domain::order::{Order, OrderStore, OrderTab};
use leptos::prelude::*;
use uuid::Uuid;
use web_sys::window;

use crate::domain::{dish, order};

/// Уведомление в шапке дашборда
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Состояние сессии дашборда: заказы, меню, активная вкладка.
///
/// Контекст раздаётся всему приложению; компоненты мутируют состояние
/// только через его методы. `pending` держит заказы с запросом в полёте,
/// их кнопки в карточках блокируются.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub orders: RwSignal<OrderStore>,
    pub catalog: RwSignal<DishCatalog>,
    pub selected_tab: RwSignal<OrderTab>,
    pub pending: RwSignal<HashSet<String>>,
    pub notices: RwSignal<Vec<Notice>>,
    pub is_loading: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            orders: RwSignal::new(OrderStore::new()),
            catalog: RwSignal::new(DishCatalog::new()),
            selected_tab: RwSignal::new(OrderTab::All),
            pending: RwSignal::new(HashSet::new()),
            notices: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
        }
    }

    /// Синхронизация активной вкладки с query-параметром `?tab=`
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(tab_name) = params.get("tab") {
            self.selected_tab.set(OrderTab::from_name(tab_name));
        }

        let this = *self;
        Effect::new(move |_| {
            let tab = this.selected_tab.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "tab".to_string(),
                tab.name().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Когда URL уже актуален, history не трогаем
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Полная загрузка сессии: меню, затем счета.
    ///
    /// Каталог грузится первым: сворачивание счетов резолвит через него
    /// названия блюд. Недоступное меню не валит загрузку, позиции
    /// получают заглушки вида "Dish #N".
    pub fn load_session(&self) {
        let this = *self;
        this.is_loading.set(true);
        leptos::task::spawn_local(async move {
            match dish::model::fetch_dishes().await {
                Ok(dishes) => {
                    leptos::logging::log!("🍽️ Меню загружено: {} блюд", dishes.len());
                    this.catalog.update(|catalog| catalog.set_all(dishes));
                }
                Err(e) => {
                    log::warn!("Меню не загружено, названия блюд будут заглушками: {}", e);
                    this.push_error(format!("Не удалось загрузить меню: {}", e));
                    this.catalog.update(|catalog| catalog.set_all(Vec::new()));
                }
            }

            match order::model::fetch_invoices().await {
                Ok(rows) => {
                    let grouped = this
                        .catalog
                        .with_untracked(|catalog| group_rows(&rows, catalog));
                    leptos::logging::log!(
                        "📥 Загружено заказов: {} (строк счетов: {})",
                        grouped.len(),
                        rows.len()
                    );
                    this.orders.update(|store| store.set_all(grouped));
                }
                Err(e) => {
                    log::error!("Ошибка загрузки счетов: {}", e);
                    this.push_error(format!("Не удалось загрузить заказы: {}", e));
                }
            }

            this.is_loading.set(false);
        });
    }

    /// Перечитать меню целиком (после добавления блюда)
    pub fn reload_catalog(&self) {
        let this = *self;
        leptos::task::spawn_local(async move {
            match dish::model::fetch_dishes().await {
                Ok(dishes) => {
                    leptos::logging::log!("🍽️ Меню обновлено: {} блюд", dishes.len());
                    this.catalog.update(|catalog| catalog.set_all(dishes));
                }
                Err(e) => {
                    log::warn!("Меню не перезагружено: {}", e);
                    this.push_error(format!("Не удалось обновить меню: {}", e));
                }
            }
        });
    }

    /// Перевести заказ на следующий статус.
    ///
    /// Смена оптимистичная: хранилище обновляется сразу, при ошибке
    /// бэкенда статус откатывается. Терминальный статус и заказ с
    /// запросом в полёте игнорируются.
    pub fn advance_status(&self, id: String) {
        let this = *self;
        if this.pending.with_untracked(|pending| pending.contains(&id)) {
            return;
        }
        let current = match this
            .orders
            .with_untracked(|store| store.get(&id).map(|o| o.status.clone()))
        {
            Some(status) => status,
            None => return,
        };
        let next = match current.next() {
            Some(next) => next,
            None => return,
        };

        leptos::logging::log!("🔄 Статус {}: {} -> {}", id, current, next);
        this.pending.update(|pending| {
            pending.insert(id.clone());
        });
        this.orders.update(|store| {
            store.update_status(&id, next.clone());
        });

        leptos::task::spawn_local(async move {
            match order::model::change_status(&id, &next).await {
                Ok(()) => {
                    this.pending.update(|pending| {
                        pending.remove(&id);
                    });
                }
                Err(e) => {
                    log::error!("Смена статуса {} не прошла, откат: {}", id, e);
                    this.orders.update(|store| {
                        store.update_status(&id, current);
                    });
                    this.pending.update(|pending| {
                        pending.remove(&id);
                    });
                    this.push_error(format!("Не удалось сменить статус заказа: {}", e));
                }
            }
        });
    }

    /// Удалить заказ: подтверждение, затем удаление всех позиций счёта.
    /// Из списка заказ уходит только если удалились все позиции.
    pub fn delete_order(&self, id: String) {
        let this = *self;
        if this.pending.with_untracked(|pending| pending.contains(&id)) {
            return;
        }
        let order = match this.orders.with_untracked(|store| store.get(&id).cloned()) {
            Some(order) => order,
            None => return,
        };

        let confirmed = window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Удалить заказ для стола {}? Все позиции счёта будут удалены.",
                    order.table
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        this.pending.update(|pending| {
            pending.insert(id.clone());
        });
        leptos::task::spawn_local(async move {
            let deletions = order
                .items
                .iter()
                .map(|item| order::model::delete_invoice_item(&order.id, &item.product_id));
            let results = futures::future::join_all(deletions).await;
            let failed: Vec<String> = results.into_iter().filter_map(Result::err).collect();

            this.pending.update(|pending| {
                pending.remove(&id);
            });
            if failed.is_empty() {
                leptos::logging::log!("🗑️ Заказ {} удалён ({} позиций)", id, order.items.len());
                this.orders.update(|store| {
                    store.remove(&id);
                });
                this.push_info(format!("Заказ для стола {} удалён", order.table));
            } else {
                log::error!("Удаление заказа {} не завершено: {:?}", id, failed);
                this.push_error(format!(
                    "Заказ удалён не полностью, обновите список: {}",
                    failed.join("; ")
                ));
            }
        });
    }

    /// Вставить заказ в конец списка; коллизия идентификаторов отклоняется.
    /// Успешная вставка подтверждается info-уведомлением.
    pub fn insert_order(&self, order: Order) -> bool {
        let id = order.id.clone();
        let table = order.table.clone();
        let mut added = false;
        self.orders.update(|store| added = store.add(order));
        if added {
            leptos::logging::log!("✅ Заказ {} добавлен в список", id);
            self.push_info(format!("Заказ для стола {} создан", table));
        } else {
            log::warn!("Заказ {} уже в списке, вставка пропущена", id);
        }
        added
    }

    pub fn select_tab(&self, tab: OrderTab) {
        leptos::logging::log!("🔖 Вкладка: {}", tab.name());
        self.selected_tab.set(tab);
    }

    /// Есть ли у заказа запрос в полёте (реактивно, для блокировки кнопок)
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.with(|pending| pending.contains(id))
    }

    pub fn push_error(&self, message: String) {
        self.push_notice(NoticeKind::Error, message);
    }

    pub fn push_info(&self, message: String) {
        self.push_notice(NoticeKind::Info, message);
    }

    fn push_notice(&self, kind: NoticeKind, message: String) {
        self.notices.update(|notices| {
            notices.push(Notice {
                id: Uuid::new_v4().to_string(),
                kind,
                message,
            });
        });
    }

    pub fn dismiss_notice(&self, id: &str) {
        self.notices.update(|notices| {
            notices.retain(|notice| notice.id != id);
        });
    }
}

#[cfg(test)]
mod tests {
    use contracts::domain::dish::Dish;

    use super::*;

    fn catalog() -> DishCatalog {
        let mut catalog = DishCatalog::new();
        catalog.set_all(vec![Dish {
            id: 1,
            name: "Big Mac".to_string(),
            description: String::new(),
            price: 15000.0,
            image: String::new(),
            category_id: 0,
        }]);
        catalog
    }

    fn order(id: &str, table: &str) -> Order {
        Order::new_with_id(id, table, &[1], &catalog()).unwrap()
    }

    #[test]
    fn inserted_order_lands_in_store_and_confirms() {
        let ctx = SessionContext::new();

        assert!(ctx.insert_order(order("42", "5")));

        assert_eq!(ctx.orders.with_untracked(|store| store.len()), 1);
        let notices = ctx.notices.get_untracked();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Info);
        assert!(notices[0].message.contains("стола 5"));
    }

    #[test]
    fn duplicate_insert_is_rejected_without_confirmation() {
        let ctx = SessionContext::new();
        ctx.insert_order(order("42", "5"));
        ctx.notices.set(Vec::new());

        assert!(!ctx.insert_order(order("42", "6")));

        assert_eq!(ctx.orders.with_untracked(|store| store.len()), 1);
        assert!(ctx.notices.get_untracked().is_empty());
    }

    #[test]
    fn dismissed_notice_leaves_the_strip() {
        let ctx = SessionContext::new();
        ctx.push_error("Не удалось загрузить меню: HTTP 500".to_string());
        ctx.push_info("Заказ для стола 5 создан".to_string());

        let error_id = ctx.notices.get_untracked()[0].id.clone();
        ctx.dismiss_notice(&error_id);

        let notices = ctx.notices.get_untracked();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Info);
    }
}
