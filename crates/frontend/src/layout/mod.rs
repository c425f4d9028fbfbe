pub mod header;
pub mod notices;

pub use header::Header;
pub use notices::Notices;
