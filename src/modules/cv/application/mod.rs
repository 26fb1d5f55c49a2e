pub mod orchestrator;
pub mod services;
