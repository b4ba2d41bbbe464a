pub mod taxonomy;

pub use taxonomy::IntentType;
