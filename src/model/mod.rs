pub mod fields;
pub mod record;
pub mod directory;

// Re-exports for convenience
pub use fields::{Birthday, Name, Phone, ValidatedField};
pub use record::{PhoneChange, Record};
pub use directory::{Directory, DEFAULT_WINDOW_DAYS};
