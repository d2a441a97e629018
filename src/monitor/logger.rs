//! Gravação e leitura do arquivo de leituras.
//!
//! Cada linha tem o formato `<passo>,<bpm>`, sem cabeçalho.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::error::{MonitorError, Result};

/// Nome padrão do arquivo de saída
pub const DEFAULT_OUTPUT_FILE: &str = "heart_rate_data.csv";

/// Escreve as leituras em qualquer destino
pub fn write_readings<W: Write>(out: W, readings: &[u32]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);
    for (step, bpm) in readings.iter().enumerate() {
        writer.write_record([step.to_string(), bpm.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Lê as leituras de volta, validando que os passos estão em ordem
pub fn read_readings<R: Read>(input: R) -> Result<Vec<u32>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut readings = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 2 {
            return Err(MonitorError::Parse {
                line: line + 1,
                reason: format!("esperados 2 campos, encontrados {}", record.len()),
            });
        }
        let step: usize = parse_field(&record[0], line)?;
        if step != readings.len() {
            return Err(MonitorError::Parse {
                line: line + 1,
                reason: format!("passo {} fora de ordem", step),
            });
        }
        readings.push(parse_field(&record[1], line)?);
    }
    Ok(readings)
}

fn parse_field<T: std::str::FromStr>(field: &str, line: usize) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    field.parse().map_err(|e: T::Err| MonitorError::Parse {
        line: line + 1,
        reason: format!("'{}': {}", field, e),
    })
}

/// Tarefa de registro das leituras em arquivo
pub struct LoggerTask<'a> {
    /// Caminho do arquivo de leituras
    log_file: &'a Path,
}

impl<'a> LoggerTask<'a> {
    pub fn new(log_file: &'a Path) -> Self {
        Self { log_file }
    }

    /// Cria (ou sobrescreve) o arquivo com todas as leituras
    pub fn save(&self, readings: &[u32]) -> Result<()> {
        let file = File::create(self.log_file)?;
        write_readings(file, readings)?;
        log::info!(
            "{} leituras gravadas em {}",
            readings.len(),
            self.log_file.display()
        );
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<u32>> {
        let file = File::open(self.log_file)?;
        read_readings(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_rows_without_header() {
        let mut out = Vec::new();
        write_readings(&mut out, &[72, 75]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0,72\n1,75\n");
    }

    #[test]
    fn empty_sequence_writes_empty_file() {
        let mut out = Vec::new();
        write_readings(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn reads_rows_back() {
        let readings = read_readings("0,72\n1,75\n2,101\n".as_bytes()).unwrap();
        assert_eq!(readings, vec![72, 75, 101]);
    }

    #[test]
    fn rejects_out_of_order_steps() {
        let err = read_readings("0,72\n2,75\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MonitorError::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_non_numeric_bpm() {
        let err = read_readings("0,abc\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MonitorError::Parse { line: 1, .. }));
    }
}
