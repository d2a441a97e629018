pub mod heart_data;
pub mod normal_range;
pub mod reading;

pub use heart_data::HeartbeatGenerator;
pub use normal_range::NormalRange;
pub use reading::{HeartbeatData, ReadingSequence};
