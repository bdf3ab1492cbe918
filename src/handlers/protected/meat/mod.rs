// handlers/protected/meat/mod.rs - Customer reading handlers

pub mod data;    // POST /meat_data
pub mod list;    // GET /meat_list
pub mod quality; // POST /calculate_quality

pub use data::store_reading;
pub use list::list_readings;
pub use quality::calculate_quality;
