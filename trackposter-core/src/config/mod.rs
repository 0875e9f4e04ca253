pub mod palette;
pub mod poster;
