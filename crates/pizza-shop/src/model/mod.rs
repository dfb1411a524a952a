//! Pure data types: pizzas, ingredients, cart rows, order status and the menu.

pub mod cart;
pub mod ingredient;
pub mod menu;
pub mod pizza;
pub mod status;

pub use cart::*;
pub use ingredient::*;
pub use menu::*;
pub use pizza::*;
pub use status::*;
