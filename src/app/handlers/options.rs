//! Handler für Optionsänderungen aus dem Options-Panel.

use crate::app::AppState;
use crate::shared::PickPolicy;

/// Setzt die Auswahlregel für das Picking.
pub fn set_pick_policy(state: &mut AppState, policy: PickPolicy) -> anyhow::Result<()> {
    state.options.pick_policy = policy;
    log::info!("Pick-Regel: {}", policy.label());
    apply(state)
}

/// Schaltet die Orientierungskorrektur im Schleifen-Zweig.
pub fn set_loop_orientation(state: &mut AppState, enabled: bool) -> anyhow::Result<()> {
    state.options.orient_loop_case = enabled;
    log::info!("Loop-Orientierung: {}", if enabled { "an" } else { "aus" });
    apply(state)
}

/// Überträgt die Optionen auf Szene, Picking und Klassifikator, klassifiziert neu
/// und speichert die Optionen-Datei.
fn apply(state: &mut AppState) -> anyhow::Result<()> {
    state.scene.curve.set_pick_radius(state.options.pick_radius);
    state.scene.camera = state.options.camera();
    state.interaction.set_pick_policy(state.options.pick_policy);
    state.interaction.set_classifier(state.options.classifier());
    state.reclassify();

    match &state.options_path {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}
