//! Estatísticas sobre uma sequência de leituras já gerada.
//!
//! Todas as funções são leituras puras. `mean` devolve 0 para a sequência
//! vazia; `max`, `min` e `variability` falham com
//! [`MonitorError::InvalidState`] quando não há leituras suficientes.

use std::fmt;

use crate::error::{MonitorError, Result};

/// Média aritmética das leituras, 0 quando vazia
pub fn mean(readings: &[u32]) -> f64 {
    if readings.is_empty() {
        return 0.0;
    }
    let total: u64 = readings.iter().map(|&bpm| u64::from(bpm)).sum();
    total as f64 / readings.len() as f64
}

/// Maior leitura
pub fn max(readings: &[u32]) -> Result<u32> {
    readings
        .iter()
        .copied()
        .max()
        .ok_or_else(|| MonitorError::InvalidState("máximo de uma sequência vazia".into()))
}

/// Menor leitura
pub fn min(readings: &[u32]) -> Result<u32> {
    readings
        .iter()
        .copied()
        .min()
        .ok_or_else(|| MonitorError::InvalidState("mínimo de uma sequência vazia".into()))
}

/// Média das diferenças absolutas entre leituras consecutivas.
///
/// Exige pelo menos duas leituras.
pub fn variability(readings: &[u32]) -> Result<f64> {
    if readings.len() < 2 {
        return Err(MonitorError::InvalidState(format!(
            "variabilidade exige ao menos 2 leituras, recebidas {}",
            readings.len()
        )));
    }
    let total: u64 = readings
        .windows(2)
        .map(|pair| u64::from(pair[1].abs_diff(pair[0])))
        .sum();
    Ok(total as f64 / (readings.len() - 1) as f64)
}

/// Resumo da análise de uma sessão
#[derive(Debug)]
pub struct HeartRateSummary {
    pub mean: f64,
    pub max: Result<u32>,
    pub min: Result<u32>,
    pub variability: Result<f64>,
}

impl HeartRateSummary {
    /// Calcula as quatro estatísticas de uma vez
    pub fn from_readings(readings: &[u32]) -> Self {
        Self {
            mean: mean(readings),
            max: max(readings),
            min: min(readings),
            variability: variability(readings),
        }
    }
}

impl fmt::Display for HeartRateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Heart Rate: {:.2} BPM", self.mean)?;
        match &self.max {
            Ok(max) => writeln!(f, "Maximum Heart Rate: {} BPM", max)?,
            Err(_) => writeln!(f, "Maximum Heart Rate: n/a BPM")?,
        }
        match &self.min {
            Ok(min) => writeln!(f, "Minimum Heart Rate: {} BPM", min)?,
            Err(_) => writeln!(f, "Minimum Heart Rate: n/a BPM")?,
        }
        match &self.variability {
            Ok(v) => writeln!(f, "Average Heart Rate Variability: {:.2} BPM", v),
            Err(_) => writeln!(f, "Average Heart Rate Variability: n/a BPM"),
        }
    }
}
