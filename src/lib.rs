pub mod config;
pub mod error;
pub mod roulette;

pub use config::SimConfig;
pub use error::WheelError;
pub use roulette::{bin_label, Bin, Outcome, Wheel};
