pub mod butcher_shop;
pub mod meat_reading;
pub mod user;

pub use butcher_shop::{ButcherShop, NewButcherShop};
pub use meat_reading::{MeatReading, NewMeatReading};
pub use user::{NewUser, User};
