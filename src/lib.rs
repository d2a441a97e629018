//! Monitor de frequência cardíaca simulado.
//!
//! Gera leituras sintéticas de BPM, sinaliza as anormais, calcula
//! estatísticas da sessão e grava as leituras em arquivo.

pub mod analysis;
pub mod error;
pub mod monitor;
pub mod simulation;
pub mod utils;

pub use error::{MonitorError, Result};
