use super::*;
use crate::judge::RoundScore;
use crate::model::FilterMode;

impl DrillApp {
    /// Corrige la ronda visible y suma su resultado al marcador.
    pub fn comprobar_respuestas(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        // `comprobar` solo devuelve puntuación la primera vez, así la
        // misma ronda no entra dos veces en el marcador.
        if let Some(ronda) = session.comprobar() {
            self.score.registrar_ronda(ronda.correct, RoundScore::HUECOS);
            self.message = if ronda.correct == RoundScore::HUECOS {
                "✅ ¡Ronda perfecta!".to_string()
            } else {
                format!("❌ Repasa los huecos marcados ({}).", ronda.fraccion())
            };
        }
    }

    /// Pasa al siguiente verbo de la sesión; exige ronda comprobada.
    pub fn siguiente_verbo(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.avanzar();
            self.message.clear();
        }
    }

    /// Cambia el filtro y reconstruye la sesión desde cero.
    pub fn cambiar_filtro(&mut self, filter: FilterMode) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.filter() == filter {
            return;
        }
        let tense = session.tense();
        self.session = Some(DrillSession::new(self.bank.catalog(tense), tense, filter));
        self.message.clear();
    }
}
