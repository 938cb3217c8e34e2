pub mod arena_sensor;
pub mod ticker;

pub use arena_sensor::ArenaSensor;
pub use ticker::Ticker;
