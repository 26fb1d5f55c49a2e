mod create_collaborator;
mod delete_collaborator;
mod get_collaborator_by_user;
mod get_collaborators;
mod get_single_collaborator;
mod patch_collaborator;
mod update_collaborator;

pub use create_collaborator::create_collaborator_handler;
pub use delete_collaborator::delete_collaborator_handler;
pub use get_collaborator_by_user::get_collaborator_by_user_handler;
pub use get_collaborators::get_collaborators_handler;
pub use get_single_collaborator::get_collaborator_handler;
pub use patch_collaborator::patch_collaborator_handler;
pub use update_collaborator::update_collaborator_handler;
