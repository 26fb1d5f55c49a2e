pub mod human_resource_service;

pub use human_resource_service::HumanResourceService;
