mod types;

pub use types::Entry;
