//! Named loggers and the factory that creates them

mod level;
mod error;
mod logger;
mod factory;

pub use level::Level;
pub use error::{LogError, LogResult};
pub use logger::{Logger, Message};
pub use factory::{create, create_with_suffix, LoggerFactory};
