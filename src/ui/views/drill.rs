use crate::DrillApp;
use crate::model::{FilterMode, Person, Tense};
use crate::ui::accents;
use crate::ui::layout::simple_panel;
use crate::view_models::{ronda_label, verdict_label};
use egui::{Button, ComboBox, Context, Id, Key, RichText, TextEdit};

pub fn ui_drill(app: &mut DrillApp, ctx: &Context) {
    let Some(tense) = app.tiempo_activo() else {
        // Sin sesión no hay nada que pintar.
        app.volver_al_inicio();
        return;
    };

    simple_panel(ctx, 560.0, egui::Margin::symmetric(24, 16), |ui| {
        // 1) Pestañas de modos hermanos (pasado y futuro comparten fila)
        let tabs = tense.tabs();
        let mut cambio: Option<Tense> = None;
        if tabs.len() > 1 {
            ui.horizontal(|ui| {
                for &tab in tabs {
                    if ui.selectable_label(tab == tense, tab.tab_label()).clicked()
                        && tab != tense
                    {
                        cambio = Some(tab);
                    }
                }
            });
            ui.separator();
        }
        if let Some(nuevo) = cambio {
            app.seleccionar_tiempo(nuevo);
            return;
        }

        // 2) Titular y recordatorio de la regla
        ui.horizontal(|ui| {
            ui.heading(tense.label());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.toggle_value(&mut app.show_rules, "📖 Ver reglas");
            });
        });
        if app.show_rules {
            ui.label(RichText::new(tense.rule_hint()).weak());
        }
        ui.add_space(4.0);

        // 3) Selector regular/irregular, solo donde el tiempo lo ofrece
        if tense.permite_filtro() {
            let mut filtro = app.filtro_activo();
            ui.horizontal(|ui| {
                ui.label("Verbos:");
                ComboBox::from_id_salt("filtro_verbos")
                    .selected_text(filtro.label())
                    .show_ui(ui, |ui| {
                        for f in FilterMode::ALL {
                            ui.selectable_value(&mut filtro, f, f.label());
                        }
                    });
            });
            // Si no cambió es un no-op; si cambió, ronda nueva desde cero.
            app.cambiar_filtro(filtro);
            ui.add_space(4.0);
        }

        // 4) La ronda en sí
        let checked = app.ronda_comprobada();
        let mut comprobar = false;
        let mut siguiente = false;
        {
            let Some(session) = app.session.as_mut() else {
                return;
            };
            let Some(item) = session.current() else {
                ui.add_space(12.0);
                ui.label("⚠ Ningún verbo pasa este filtro. Elige otro.");
                return;
            };
            let ronda = session.last_score();

            ui.horizontal(|ui| {
                ui.label("Verbo:");
                ui.label(RichText::new(&item.verb).strong().size(22.0));
            });
            ui.add_space(8.0);

            egui::Grid::new("huecos")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for person in Person::TODAS {
                        ui.label(person.label());

                        let field_id = Id::new(("hueco", person.index()));
                        let campo = TextEdit::singleline(session.answer_mut(person))
                            .id(field_id)
                            .desired_width(180.0);
                        let response = ui.add_enabled(!checked, campo);

                        if response.has_focus() {
                            app.focused_input = Some((person, field_id));
                        }
                        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                            comprobar = true;
                        }

                        match ronda {
                            Some(score) => {
                                ui.label(verdict_label(score.is_ok(person), item.forms.get(person)));
                            }
                            None => {
                                ui.label("");
                            }
                        }
                        ui.end_row();
                    }
                });

            // 5) Panel de tildes para teclados sin ellas
            ui.add_space(6.0);
            ui.toggle_value(&mut app.show_accents, "´ Tildes");
            if app.show_accents && !checked {
                let mut pulsada: Option<char> = None;
                ui.horizontal_wrapped(|ui| {
                    for ch in accents::ACCENT_CHARS {
                        if ui.small_button(ch.to_string()).clicked() {
                            pulsada = Some(ch);
                        }
                    }
                });
                if let (Some(ch), Some((person, field_id))) = (pulsada, app.focused_input) {
                    accents::insertar_en_cursor(ctx, field_id, session.answer_mut(person), ch);
                }
            }

            // 6) Pie: comprobar o avanzar, con la puntuación de la ronda
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if checked {
                    if let Some(score) = ronda {
                        ui.label(RichText::new(ronda_label(&score)).strong());
                        ui.add_space(4.0);
                    }
                    if ui
                        .add_sized([220.0, 36.0], Button::new("➡ Siguiente verbo"))
                        .clicked()
                    {
                        siguiente = true;
                    }
                } else if ui
                    .add_sized([220.0, 36.0], Button::new("Comprobar"))
                    .clicked()
                {
                    comprobar = true;
                }
            });
        }

        if comprobar {
            app.comprobar_respuestas();
        }
        if siguiente {
            app.siguiente_verbo();
        }

        ui.add_space(8.0);
        if !app.message.is_empty() {
            ui.label(&app.message);
        }
    });
}
