pub mod classify;
pub mod summary;
