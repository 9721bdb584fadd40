//! Store implementations of the repository ports.

mod memory;

pub use memory::{InMemoryAccounts, InMemoryReactionTimes};
