use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analysis::HeartRateSummary;
use crate::error::Result;
use crate::monitor::logger::{DEFAULT_OUTPUT_FILE, LoggerTask};
use crate::monitor::sensor::HeartbeatSensorTask;
use crate::simulation::{HeartbeatData, HeartbeatGenerator, ReadingSequence};
use crate::utils::timing::{DEFAULT_STEP_INTERVAL, ExecutionTimer, Pacer};

/// Duração padrão da simulação, em segundos
pub const DEFAULT_DURATION: usize = 60;

/// Parâmetros de uma sessão de monitoramento
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Número de segundos simulados
    pub duration: usize,
    /// Arquivo de saída das leituras
    pub output: PathBuf,
    /// Semente fixa; `None` usa a entropia do sistema
    pub seed: Option<u64>,
    /// Intervalo entre leituras no modo interativo; `None` desliga a espera
    pub step_interval: Option<Duration>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            seed: None,
            step_interval: Some(DEFAULT_STEP_INTERVAL),
        }
    }
}

/// Sessão de monitoramento: dona do gerador e da sequência de leituras
pub struct HeartRateMonitor {
    generator: HeartbeatGenerator,
    readings: ReadingSequence,
}

impl HeartRateMonitor {
    pub fn new(generator: HeartbeatGenerator) -> Self {
        Self {
            generator,
            readings: ReadingSequence::new(),
        }
    }

    /// Cria a sessão semeando o gerador conforme a configuração
    pub fn from_config(config: &MonitorConfig) -> Result<Self> {
        let generator = match config.seed {
            Some(seed) => {
                log::info!("Gerador semeado com {}", seed);
                HeartbeatGenerator::with_seed(seed)?
            }
            None => HeartbeatGenerator::from_entropy()?,
        };
        Ok(Self::new(generator))
    }

    /// Simula `duration` segundos, substituindo leituras anteriores
    pub fn simulate<F>(&mut self, duration: usize, observer: F) -> &ReadingSequence
    where
        F: FnMut(&HeartbeatData),
    {
        let timer = ExecutionTimer::new("Simulação");
        self.readings = self.generator.generate_with(duration, observer);
        timer.stop();
        &self.readings
    }

    pub fn readings(&self) -> &ReadingSequence {
        &self.readings
    }

    pub fn summary(&self) -> HeartRateSummary {
        HeartRateSummary::from_readings(self.readings.as_slice())
    }

    /// Grava as leituras; a falha é devolvida ao chamador e não afeta a sessão
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        LoggerTask::new(path.as_ref()).save(self.readings.as_slice())
    }
}

/// Resultado de uma sessão completa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub readings: usize,
    pub alarms: u32,
    /// Verdadeiro se o arquivo de leituras foi gravado
    pub saved: bool,
}

/// Escreve uma linha informativa; falhas do console não interrompem a sessão
fn emit<W: Write>(out: &mut W, args: fmt::Arguments<'_>) {
    if let Err(e) = out.write_fmt(args) {
        log::warn!("Erro ao escrever no console: {}", e);
    }
}

/// Executa a sessão inteira: simula, exibe o resumo e grava as leituras.
///
/// A saída normal vai para `out` e a mensagem de falha de gravação para
/// `err`. Só falha se o gerador não puder ser criado.
pub fn run_session<W: Write, E: Write>(
    config: &MonitorConfig,
    mut out: W,
    mut err: E,
) -> Result<SessionReport> {
    let mut monitor = HeartRateMonitor::from_config(config)?;
    emit(&mut out, format_args!("Advanced Heart Rate Monitoring Started\n"));

    let mut sensor = HeartbeatSensorTask::new(&mut out);
    if let Some(interval) = config.step_interval {
        sensor = sensor.with_pacer(Pacer::new(interval));
    }
    monitor.simulate(config.duration, |data| {
        if let Err(e) = sensor.execute(data) {
            log::warn!("Erro ao exibir leitura: {}", e);
        }
    });
    let alarms = sensor.alarm_count();

    let summary = monitor.summary();
    emit(&mut out, format_args!("\nAnalysis Results:\n{}", summary));
    for e in [
        summary.max.as_ref().err(),
        summary.min.as_ref().err(),
        summary.variability.as_ref().err(),
    ]
    .into_iter()
    .flatten()
    {
        log::warn!("Estatística indisponível: {}", e);
    }

    let saved = match monitor.save(&config.output) {
        Ok(()) => {
            emit(
                &mut out,
                format_args!("Data saved to {}\n", config.output.display()),
            );
            true
        }
        Err(e) => {
            if let Err(flush) = out.flush() {
                log::warn!("Erro ao escrever no console: {}", flush);
            }
            emit(&mut err, format_args!("Unable to open file for writing\n"));
            log::error!("Erro ao gravar {}: {}", config.output.display(), e);
            false
        }
    };

    Ok(SessionReport {
        readings: monitor.readings().len(),
        alarms,
        saved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MonitorError;

    #[test]
    fn empty_session_follows_policy() {
        let mut monitor = HeartRateMonitor::new(HeartbeatGenerator::with_seed(3).unwrap());
        assert!(monitor.simulate(0, |_| {}).is_empty());

        let summary = monitor.summary();
        assert_eq!(summary.mean, 0.0);
        assert!(matches!(summary.max, Err(MonitorError::InvalidState(_))));
        assert!(matches!(summary.min, Err(MonitorError::InvalidState(_))));
        assert!(matches!(summary.variability, Err(MonitorError::InvalidState(_))));
    }

    #[test]
    fn summary_stays_inside_clipping_range() {
        let config = MonitorConfig {
            seed: Some(11),
            ..MonitorConfig::default()
        };
        let mut monitor = HeartRateMonitor::from_config(&config).unwrap();
        monitor.simulate(config.duration, |_| {});
        assert_eq!(monitor.readings().len(), DEFAULT_DURATION);

        let summary = monitor.summary();
        assert!((40.0..=180.0).contains(&summary.mean));
        assert!(summary.min.unwrap() <= summary.max.unwrap());
        assert!(summary.variability.unwrap() >= 0.0);
    }

    #[test]
    fn save_failure_leaves_readings_intact() {
        let dir = tempfile::tempdir().unwrap();
        let mut monitor = HeartRateMonitor::new(HeartbeatGenerator::with_seed(5).unwrap());
        monitor.simulate(10, |_| {});

        let missing = dir.path().join("nao_existe").join("dados.csv");
        assert!(matches!(monitor.save(missing), Err(MonitorError::Io(_))));
        assert_eq!(monitor.readings().len(), 10);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }
    }

    fn quick_config(output: PathBuf) -> MonitorConfig {
        MonitorConfig {
            duration: 5,
            output,
            seed: Some(1),
            step_interval: None,
        }
    }

    #[test]
    fn broken_console_still_saves_readings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dados.csv");

        let mut err = Vec::new();
        let report = run_session(&quick_config(path.clone()), BrokenPipe, &mut err).unwrap();
        assert_eq!(report.readings, 5);
        assert!(report.saved);
        assert!(err.is_empty());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 5);
        assert!(contents.starts_with("0,"));
    }

    #[test]
    fn save_failure_goes_to_error_channel() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nao_existe").join("dados.csv");

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let report = run_session(&quick_config(missing), &mut out, &mut err).unwrap();
        assert!(!report.saved);
        assert_eq!(report.readings, 5);

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Advanced Heart Rate Monitoring Started\n"));
        assert!(out.contains("\nAnalysis Results:\n"));
        assert!(!out.contains("Data saved to"));
        assert_eq!(String::from_utf8(err).unwrap(), "Unable to open file for writing\n");
    }
}
