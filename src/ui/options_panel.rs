//! Seitenpanel für Pick-Regel, Loop-Orientierung und Kurven-Reset.

use crate::app::{AppIntent, AppState};
use crate::shared::PickPolicy;

/// Zeigt das Options-Panel und gibt erzeugte Events zurück.
pub fn render_options_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("options_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Kurve");
            ui.separator();

            let mut policy = state.options.pick_policy;
            egui::ComboBox::from_label("Picking")
                .selected_text(policy.label())
                .show_ui(ui, |ui| {
                    for candidate in [PickPolicy::FirstHit, PickPolicy::NearestHit] {
                        ui.selectable_value(&mut policy, candidate, candidate.label());
                    }
                });
            if policy != state.options.pick_policy {
                events.push(AppIntent::PickPolicyChanged { policy });
            }

            let mut orient = state.options.orient_loop_case;
            if ui
                .checkbox(&mut orient, "Orientierung im Loop-Fall")
                .changed()
            {
                events.push(AppIntent::LoopOrientationToggled { enabled: orient });
            }

            ui.add_space(8.0);

            if ui.button("Kurve zurücksetzen").clicked() {
                events.push(AppIntent::ResetCurveRequested);
            }

            ui.add_space(8.0);
            ui.separator();

            for (i, cp) in state.scene.curve.points().iter().enumerate() {
                let p = cp.position;
                ui.monospace(format!("b{}: ({:+.3}, {:+.3}, {:+.3})", i, p.x, p.y, p.z));
            }

            ui.add_space(8.0);

            if ui.button("Beenden").clicked() {
                events.push(AppIntent::ExitRequested);
            }
        });

    events
}
