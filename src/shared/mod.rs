pub mod api;
pub mod clock;
pub mod config;
pub mod crud;
pub mod patch;
pub mod persistence;
