//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, InteractionState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match &state.classification {
                Some(c) => {
                    ui.label(format!("Typ: {}", c.kind.label()));
                    ui.separator();
                    ui.label(format!("Diskriminante: {:.4}", c.discriminant));
                    ui.separator();
                    let [d0, d1, d2, d3] = c.invariants;
                    ui.label(format!(
                        "d0..d3: ({:.3}, {:.3}, {:.3}, {:.3})",
                        d0, d1, d2, d3
                    ));
                    if c.orientation_corrected {
                        ui.separator();
                        ui.label("Orientierung korrigiert");
                    }
                }
                None => {
                    ui.label("Keine Klassifikation");
                }
            }

            ui.separator();

            if !state.classification_ok {
                ui.colored_label(egui::Color32::YELLOW, "Klassifikation fehlgeschlagen");
                ui.separator();
            }

            match state.interaction.state() {
                InteractionState::Idle => ui.label("Bereit"),
                InteractionState::Dragging { index } => ui.label(format!("Ziehe b{}", index)),
            };

            ui.separator();

            ui.label(format!(
                "Cursor: ({:.0}, {:.0})",
                state.scene.cursor.x, state.scene.cursor.y
            ));
        });
    });
}
