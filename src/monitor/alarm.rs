use crate::simulation::reading::HeartbeatData;

pub use crate::simulation::normal_range::NormalRange;

/// Alarme de frequência anormal
#[derive(Debug, Default)]
pub struct EmergencyAlarmTask {
    /// Contador de alarmes disparados
    alarm_count: u32,
}

impl EmergencyAlarmTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verifica a leitura, retorna verdadeiro se o alarme disparou
    pub fn execute(&mut self, data: &HeartbeatData) -> bool {
        if !data.is_anomaly {
            return false;
        }
        self.alarm_count += 1;
        log::warn!(
            "Frequência anormal: {} BPM em {}s (alarme #{})",
            data.bpm,
            data.step,
            self.alarm_count
        );
        true
    }

    pub fn alarm_count(&self) -> u32 {
        self.alarm_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alarm_counts_only_abnormal_readings() {
        let mut alarm = EmergencyAlarmTask::new();
        assert!(!alarm.execute(&HeartbeatData::new(0, 80)));
        assert!(alarm.execute(&HeartbeatData::new(1, 55)));
        assert!(alarm.execute(&HeartbeatData::new(2, 130)));
        assert_eq!(alarm.alarm_count(), 2);
    }
}
