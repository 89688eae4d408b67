//! Handler für Picking, Drag und Zurücksetzen der Kurve.

use crate::app::interaction::DragError;
use crate::app::AppState;
use glam::Vec2;

/// Pick-Test unter dem Cursor; startet bei Treffer einen Drag.
pub fn begin_drag(state: &mut AppState, screen_pos: Vec2) {
    if let Err(e) = state.interaction.on_press(&mut state.scene, screen_pos) {
        log::warn!("Pick-Strahl nicht berechenbar: {}", e);
    }
}

/// Verschiebt den gezogenen Punkt und veröffentlicht die neue Klassifikation.
pub fn drag(state: &mut AppState, screen_pos: Vec2) {
    match state.interaction.on_move(&mut state.scene, screen_pos) {
        Ok(Some(classification)) => state.publish(Ok(classification)),
        Ok(None) => {}
        Err(DragError::Ray(e)) => {
            log::warn!("Drag-Schritt übersprungen: {}", e);
        }
        Err(DragError::Classify(e)) => state.publish(Err(e)),
    }
}

/// Beendet einen laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    state.interaction.on_release();
}

/// Setzt die Kontrollpunkte auf die Startwerte und klassifiziert neu.
pub fn reset(state: &mut AppState) {
    state.scene.curve.reset();
    log::info!("Kurve zurückgesetzt");
    state.reclassify();
}
