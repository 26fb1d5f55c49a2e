pub mod collaborator_lookup;

pub use collaborator_lookup::CollaboratorLookup;
