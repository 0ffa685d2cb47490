use super::*;
use crate::model::{FilterMode, Tense};

impl DrillApp {
    /// Abre la práctica de un tiempo, desde el inicio o desde las
    /// pestañas de modos hermanos. Siempre arranca sin filtro.
    pub fn seleccionar_tiempo(&mut self, tense: Tense) {
        self.session = Some(DrillSession::new(
            self.bank.catalog(tense),
            tense,
            FilterMode::All,
        ));
        self.state = AppState::Drill;
        self.show_rules = false;
        self.focused_input = None;
        self.message.clear();
    }

    pub fn volver_al_inicio(&mut self) {
        self.session = None;
        self.state = AppState::Home;
        self.focused_input = None;
        self.message.clear();
    }
}
