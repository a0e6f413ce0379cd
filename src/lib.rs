pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod optimizer;
pub mod partition;
pub mod roster;
pub mod scorer;
// cmd and reports belong to the binary (main.rs).
