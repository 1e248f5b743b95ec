pub mod configuration;
pub mod dispatch;
pub mod domain;
pub mod fixtures;
pub mod startup;
pub mod suite;
pub mod telemetry;
pub mod timestamp;

pub use dispatch::{DispatchError, start_threads, try_start_indexed_threads, try_start_threads};
pub use telemetry::debug;
pub use timestamp::get_current_time;
