pub mod card;
pub mod create_modal;
pub mod list;
pub mod tabs;

pub use card::OrderCard;
pub use create_modal::CreateOrderModal;
pub use list::OrderList;
pub use tabs::TabsSelector;
