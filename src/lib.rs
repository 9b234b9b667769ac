pub mod buffer;
pub mod config;
pub mod dictionary;
pub mod director;
pub mod input;
pub mod logging;
pub mod score;
pub mod screen;
pub mod types;
pub mod words;

pub use config::Config;
pub use director::Director;
pub use words::Words;
