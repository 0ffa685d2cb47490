use crate::data::{VerbBank, read_verbs_embedded};
use crate::model::{AppState, ScoreAggregate};
use crate::session::DrillSession;
use eframe::egui;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;

/// Clave del marcador dentro del almacén clave-valor de eframe.
pub const SCORE_KEY: &str = "tiempos_quiz_score";

pub struct DrillApp {
    pub bank: VerbBank,
    pub session: Option<DrillSession>,
    pub score: ScoreAggregate,
    pub state: AppState,
    pub message: String,
    pub show_rules: bool,
    pub show_accents: bool,
    pub confirm_reset: bool,
    /// Último campo de respuesta con foco, para el panel de tildes.
    pub focused_input: Option<(crate::model::Person, egui::Id)>,
}

impl Default for DrillApp {
    fn default() -> Self {
        Self {
            bank: read_verbs_embedded(),
            session: None,
            score: ScoreAggregate::default(),
            state: AppState::Home,
            message: String::new(),
            show_rules: false,
            show_accents: false,
            confirm_reset: false,
            focused_input: None,
        }
    }
}

impl DrillApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();

        // Marcador guardado de sesiones anteriores; si la entrada falta
        // o no se entiende, se arranca a cero.
        app.score = cc
            .storage
            .and_then(|storage| eframe::get_value::<ScoreAggregate>(storage, SCORE_KEY))
            .unwrap_or_default();

        log::info!(
            "Banco de verbos listo ({} entradas); marcador restaurado: {}",
            app.bank.total_entries(),
            app.score.texto()
        );

        app
    }
}
