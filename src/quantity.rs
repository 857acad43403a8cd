#[macro_use]
mod macros;

pub mod earnings;
pub mod rate;
pub mod time;
