pub mod boy;
pub mod girl;

pub use boy::Boy;
pub use girl::Girl;
