use std::thread;
use std::time::{Duration, Instant};

/// Intervalo padrão entre leituras no modo interativo
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(100);

/// Ritmo em tempo real para a demonstração.
///
/// Bloqueia a thread atual; não faz parte da geração de dados.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Espera um intervalo
    pub fn wait(&self) {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }
}

/// Utilitário para medir a duração de uma etapa da sessão
pub struct ExecutionTimer {
    start: Instant,
    name: String,
}

impl ExecutionTimer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Encerra e retorna a duração
    pub fn stop(self) -> Duration {
        let duration = self.start.elapsed();
        log::debug!("{} executou em {:?}", self.name, duration);
        duration
    }
}
