pub mod contact;
pub mod wire;

// Re-exports for convenience
pub use contact::{Contact, ContactId, ContactPatch, DeleteOutcome, NewContact, UpdateOutcome};
