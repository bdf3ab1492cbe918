// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Security Level: None
// Middleware: none beyond the global trace/CORS/body-limit layers

pub mod auth;
pub mod system;

pub use auth::*;
pub use system::{health, root};

/*
PUBLIC HANDLER NOTES:

1. **No User Context**: handlers never see an AuthUser, so every input is
   validated from scratch.
2. **Credential Handling**: passwords are hashed on signup and verified on
   login on the blocking pool; bcrypt work never runs on a runtime worker.
3. **Security Logging**: failed logins are logged at warn with the username
   (never the password).
*/
