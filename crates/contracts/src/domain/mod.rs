pub mod dish;
pub mod invoice;
pub mod order;
