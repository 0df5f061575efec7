mod day_record;
mod derived;
mod photo;
mod stats;
mod task;

pub use day_record::*;
pub use derived::water_increment_allowed;
pub use photo::*;
pub use stats::*;
pub use task::*;
