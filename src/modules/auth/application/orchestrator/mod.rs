pub mod user_provisioning;

pub use user_provisioning::{NewIdentity, UserProvisioner};
