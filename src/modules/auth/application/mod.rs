pub mod domain;
pub mod orchestrator;
pub mod ports;
