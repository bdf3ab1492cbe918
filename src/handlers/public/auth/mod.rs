// handlers/public/auth/mod.rs - Public authentication handlers
//
// Account creation and token acquisition. These are the only endpoints a
// caller can reach without a bearer token, apart from the service descriptor
// and health check.

pub mod login;  // POST /login - verify credentials and issue JWT
pub mod signup; // POST /signup - create new account

pub use login::login;
pub use signup::signup;
