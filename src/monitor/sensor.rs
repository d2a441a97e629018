use std::io::{self, Write};

use crate::monitor::alarm::EmergencyAlarmTask;
use crate::simulation::reading::HeartbeatData;
use crate::utils::timing::Pacer;

/// Exibe cada leitura assim que é gerada.
///
/// Escreve uma linha por passo em `out`, repassa a leitura ao alarme e, se
/// houver um [`Pacer`], espera antes de devolver o controle ao gerador.
pub struct HeartbeatSensorTask<W: Write> {
    out: W,
    alarm: EmergencyAlarmTask,
    pacer: Option<Pacer>,
}

impl<W: Write> HeartbeatSensorTask<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            alarm: EmergencyAlarmTask::new(),
            pacer: None,
        }
    }

    /// Ativa o ritmo em tempo real
    pub fn with_pacer(mut self, pacer: Pacer) -> Self {
        self.pacer = Some(pacer);
        self
    }

    /// Executa a lógica da tarefa para uma leitura.
    ///
    /// Alarme e espera acontecem mesmo se a escrita falhar.
    pub fn execute(&mut self, data: &HeartbeatData) -> io::Result<()> {
        let written = writeln!(self.out, "{}", data);
        self.alarm.execute(data);
        if let Some(pacer) = &self.pacer {
            pacer.wait();
        }
        written
    }

    pub fn alarm_count(&self) -> u32 {
        self.alarm.alarm_count()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
