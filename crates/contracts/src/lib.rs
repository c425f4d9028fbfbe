//! Контракты предметной области дашборда заказов: модель данных,
//! wire-DTO REST-бэкенда и чистая бизнес-логика (жизненный цикл статусов,
//! сворачивание строк счетов, рабочее хранилище, фильтр вкладок, сборка
//! заказа). Без UI-зависимостей — crate используется фронтендом и тестами.

pub mod domain;
