use super::*;

impl DrillApp {
    /// Pone el marcador acumulado a cero y cierra el diálogo.
    pub fn reiniciar_marcador(&mut self) {
        self.score.reiniciar();
        self.confirm_reset = false;
        self.message = "🔄 Marcador a cero.".to_string();
        log::info!("Marcador reiniciado por el usuario");
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(
                    "¿Seguro que quieres poner el marcador a cero? \
                     ¡Esta acción no se puede deshacer!",
                );
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.reiniciar_marcador();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
