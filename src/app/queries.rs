use super::*;
use crate::model::{FilterMode, Tense};

impl DrillApp {
    pub fn tiempo_activo(&self) -> Option<Tense> {
        self.session.as_ref().map(|s| s.tense())
    }

    pub fn filtro_activo(&self) -> FilterMode {
        self.session
            .as_ref()
            .map(|s| s.filter())
            .unwrap_or_default()
    }

    pub fn ronda_comprobada(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_checked())
    }
}
