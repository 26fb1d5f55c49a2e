pub mod cv_ownership;

pub use cv_ownership::CvOwnershipSynchronizer;
