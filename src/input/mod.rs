//! Input handling: file type detection and text loading

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
