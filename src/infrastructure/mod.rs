//! Infrastructure layer - Clock, files, config and logging

pub mod clock;
pub mod config;
pub mod image_file;
pub mod logging;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use image_file::read_image_file;
