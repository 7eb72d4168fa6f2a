// Crate root library declaration and module exports.
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
