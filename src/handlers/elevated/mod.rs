// handlers/elevated/mod.rs - Elevated handlers (admin role required)
//
// Security Level: authenticated admin
// Middleware: jwt_auth_middleware, then require_role(Admin)

pub mod admin;

pub use admin::*;
