// handlers/mod.rs - Handler organization by security tier
//
// public/    - no token (signup, login, descriptor, health)
// protected/ - token plus manager or customer role
// elevated/  - token plus admin role

pub mod elevated;
pub mod protected;
pub mod public;
