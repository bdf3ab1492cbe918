pub mod shops; // GET /admin/shops
pub mod users; // GET /admin/users

pub use shops::list_shops;
pub use users::list_users;
