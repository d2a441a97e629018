use std::fmt;

use super::normal_range::NormalRange;

/// Leitura de um passo da simulação, entregue ao observador do gerador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartbeatData {
    /// Passo da simulação (segundos desde o início, base 0)
    pub step: usize,
    pub bpm: u32,
    /// Verdadeiro quando o BPM está fora da faixa normal
    pub is_anomaly: bool,
}

impl HeartbeatData {
    /// Cria a leitura classificando-a pela faixa normal padrão
    pub fn new(step: usize, bpm: u32) -> Self {
        Self {
            step,
            bpm,
            is_anomaly: NormalRange::STANDARD.is_abnormal(bpm),
        }
    }
}

impl fmt::Display for HeartbeatData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time: {}s, Heart Rate: {} BPM", self.step, self.bpm)?;
        if self.is_anomaly {
            write!(f, " - Abnormal Rate Detected!")?;
        }
        Ok(())
    }
}

/// Sequência ordenada de leituras, uma por segundo simulado.
///
/// Só cresce através do gerador; depois da simulação é apenas lida.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingSequence {
    readings: Vec<u32>,
}

impl ReadingSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, bpm: u32) {
        self.readings.push(bpm);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.readings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_marks_abnormal_readings() {
        assert_eq!(
            HeartbeatData::new(3, 72).to_string(),
            "Time: 3s, Heart Rate: 72 BPM"
        );
        assert_eq!(
            HeartbeatData::new(4, 101).to_string(),
            "Time: 4s, Heart Rate: 101 BPM - Abnormal Rate Detected!"
        );
    }
}
