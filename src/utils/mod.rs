pub mod timing;

pub use timing::{ExecutionTimer, Pacer};
