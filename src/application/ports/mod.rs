// src/application/ports/mod.rs
pub mod security;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenServicePort = dyn security::TokenService;
pub type ClockPort = dyn time::Clock;
