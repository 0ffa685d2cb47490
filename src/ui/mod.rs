mod accents;
pub mod layout;
pub mod views;

use crate::app::{DrillApp, SCORE_KEY};
use crate::model::AppState;
use eframe::{App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for DrillApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // PANEL SUPERIOR: marcador siempre a la vista; volver al inicio
        // solo durante la práctica.
        top_panel(self, ctx, matches!(self.state, AppState::Drill));

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Drill => views::drill::ui_drill(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        // Solo persiste el marcador; la sesión en curso es efímera.
        set_value(storage, SCORE_KEY, &self.score);
    }
}
