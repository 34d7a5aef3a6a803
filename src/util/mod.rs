// Generic utilities shared across pages
pub mod debounce;
pub mod format;
pub mod validate;
