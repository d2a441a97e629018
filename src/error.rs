use thiserror::Error;

/// Erros do monitor de frequência cardíaca
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Operação chamada sobre uma sequência sem leituras suficientes
    #[error("estado inválido: {0}")]
    InvalidState(String),

    /// Parâmetros inválidos para a distribuição normal
    #[error("distribuição inválida: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("erro de CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Linha do arquivo de leituras que não pôde ser interpretada
    #[error("linha {line} inválida: {reason}")]
    Parse { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, MonitorError>;
