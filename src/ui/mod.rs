pub mod ci;
pub mod console;
pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
