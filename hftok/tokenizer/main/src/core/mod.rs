pub mod hf;
pub mod loader;
pub mod quiet;
