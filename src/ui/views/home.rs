use crate::DrillApp;
use crate::ui::layout::centered_panel;
use crate::view_models::tense_cards;
use egui::{Button, Context, RichText};

pub fn ui_home(app: &mut DrillApp, ctx: &Context) {
    centered_panel(ctx, 460.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🇪🇸 Tiempos del español");
            ui.add_space(6.0);
            ui.label("Elige un tiempo y rellena las seis personas de cada verbo.");
            ui.add_space(16.0);

            let button_width = (ui.available_width() - 40.0).clamp(220.0, 340.0);

            for card in tense_cards() {
                let etiqueta = format!("{}\n{}", card.title, card.subtitle);
                if ui
                    .add_sized([button_width, 48.0], Button::new(etiqueta))
                    .clicked()
                {
                    app.seleccionar_tiempo(card.tense);
                }
                ui.add_space(6.0);
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new(&app.message).strong());
            }
        });
    });
}
