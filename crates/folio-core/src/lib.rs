pub mod animation;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod nav;
pub mod scheduler;
pub mod viewport;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
