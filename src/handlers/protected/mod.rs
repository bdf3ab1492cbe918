// handlers/protected/mod.rs - Protected handlers (JWT plus role required)
//
// Security Level: authenticated user with a specific role
// Middleware: jwt_auth_middleware, then require_role for the route group
//
// Every handler here receives the caller as Extension<AuthUser>. Ownership
// (shop manager, reading owner) always comes from that extension and never
// from the request body.

pub mod meat;
pub mod shop;

pub use meat::*;
pub use shop::register_shop;
