pub mod aliases;
pub mod classify;
pub mod driver;
pub mod errors;
mod information;
pub mod input;
mod loader;
pub mod output;
pub mod table;
