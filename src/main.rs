use std::io;
use std::path::PathBuf;

use clap::Parser;

use monitor_frequencia_cardiaca::monitor::logger::DEFAULT_OUTPUT_FILE;
use monitor_frequencia_cardiaca::monitor::session::{DEFAULT_DURATION, MonitorConfig, run_session};
use monitor_frequencia_cardiaca::utils::timing::DEFAULT_STEP_INTERVAL;

/// Monitor de Frequência Cardíaca Simulado
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Duração da simulação em segundos
    #[arg(short, long, default_value_t = DEFAULT_DURATION)]
    duration: usize,

    /// Arquivo para salvar as leituras
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Semente fixa para reproduzir uma sessão
    #[arg(short, long)]
    seed: Option<u64>,

    /// Não esperar entre leituras
    #[arg(long)]
    no_delay: bool,
}

impl From<Args> for MonitorConfig {
    fn from(args: Args) -> Self {
        Self {
            duration: args.duration,
            output: args.output,
            seed: args.seed,
            step_interval: (!args.no_delay).then_some(DEFAULT_STEP_INTERVAL),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configurar logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = MonitorConfig::from(Args::parse());
    log::info!(
        "Sessão iniciada às {}: {} segundos, saída em {}",
        chrono::Local::now().format("%H:%M:%S"),
        config.duration,
        config.output.display()
    );

    let report = run_session(&config, io::stdout().lock(), io::stderr().lock())?;

    log::info!(
        "Simulação concluída às {}: {} leituras, {} alarmes",
        chrono::Local::now().format("%H:%M:%S"),
        report.readings,
        report.alarms
    );

    Ok(())
}
