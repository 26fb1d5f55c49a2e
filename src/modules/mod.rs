pub mod auth;
pub mod collaborator;
pub mod cv;
pub mod experience;
pub mod file_entry;
pub mod human_resource;
pub mod language;
pub mod skill;
pub mod study;
