pub mod alarm;
pub mod logger;
pub mod sensor;
pub mod session;

pub use alarm::{EmergencyAlarmTask, NormalRange};
pub use logger::LoggerTask;
pub use sensor::HeartbeatSensorTask;
pub use session::{HeartRateMonitor, MonitorConfig, SessionReport, run_session};
