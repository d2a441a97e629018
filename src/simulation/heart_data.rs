use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use super::reading::{HeartbeatData, ReadingSequence};
use crate::error::Result;

/// Média da distribuição de BPM
pub const MEAN_BPM: f64 = 80.0;
/// Desvio padrão da distribuição de BPM
pub const STD_DEV_BPM: f64 = 10.0;
/// Menor leitura possível após o corte
pub const MIN_BPM: u32 = 40;
/// Maior leitura possível após o corte
pub const MAX_BPM: u32 = 180;

/// Gerador de dados cardíacos simulados
pub struct HeartbeatGenerator {
    /// Distribuição normal para gerar valores
    distribution: Normal<f64>,
    /// Gerador de números aleatórios, semeado uma única vez
    rng: StdRng,
}

impl HeartbeatGenerator {
    /// Cria um gerador semeado pela entropia do sistema
    pub fn from_entropy() -> Result<Self> {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Cria um gerador determinístico
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Result<Self> {
        Ok(Self {
            distribution: Normal::new(MEAN_BPM, STD_DEV_BPM)?,
            rng,
        })
    }

    /// Gera o próximo valor de batimento cardíaco, já arredondado e cortado
    pub fn next_value(&mut self) -> u32 {
        clip_bpm(self.distribution.sample(&mut self.rng))
    }

    /// Gera `step_count` leituras sem notificar ninguém
    pub fn generate(&mut self, step_count: usize) -> ReadingSequence {
        self.generate_with(step_count, |_| {})
    }

    /// Gera `step_count` leituras, chamando `observer` a cada passo
    pub fn generate_with<F>(&mut self, step_count: usize, mut observer: F) -> ReadingSequence
    where
        F: FnMut(&HeartbeatData),
    {
        let mut readings = ReadingSequence::with_capacity(step_count);
        for step in 0..step_count {
            let bpm = self.next_value();
            readings.push(bpm);
            observer(&HeartbeatData::new(step, bpm));
        }
        log::debug!("{} leituras geradas", readings.len());
        readings
    }
}

/// Arredonda para o inteiro mais próximo e corta em [MIN_BPM, MAX_BPM]
pub fn clip_bpm(raw: f64) -> u32 {
    raw.round().clamp(MIN_BPM as f64, MAX_BPM as f64) as u32
}
