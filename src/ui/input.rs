//! Viewport-Input-Handling: Pointer-Events → AppIntent.

use crate::app::{AppIntent, PointerButton};
use glam::Vec2;

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Default)]
pub struct InputState {
    /// Primärtaste wurde im Viewport gedrückt und noch nicht losgelassen
    primary_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_down: false,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Die Reihenfolge von Press, Move und Release innerhalb eines Frames bleibt erhalten.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let mut events = vec![AppIntent::ViewportResized {
            size: viewport_size,
        }];

        let raw_events = ui.input(|i| i.events.clone());
        events.extend(
            raw_events
                .iter()
                .filter_map(|event| self.translate_event(event, response.rect)),
        );

        events
    }

    /// Übersetzt ein einzelnes egui-Event in Viewport-Pixel relativ zu `rect`.
    fn translate_event(&mut self, event: &egui::Event, rect: egui::Rect) -> Option<AppIntent> {
        match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } => {
                if !rect.contains(*pos) {
                    return None;
                }
                let button = map_button(*button)?;
                if button == PointerButton::Primary {
                    self.primary_down = true;
                }
                Some(AppIntent::PointerPressed {
                    screen_pos: to_viewport(*pos, rect),
                    button,
                })
            }
            egui::Event::PointerButton {
                button,
                pressed: false,
                ..
            } => {
                let button = map_button(*button)?;
                if button == PointerButton::Primary {
                    if !self.primary_down {
                        return None;
                    }
                    self.primary_down = false;
                }
                Some(AppIntent::PointerReleased { button })
            }
            egui::Event::PointerMoved(pos) if self.primary_down || rect.contains(*pos) => {
                Some(AppIntent::PointerMoved {
                    screen_pos: to_viewport(*pos, rect),
                })
            }
            _ => None,
        }
    }
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

fn to_viewport(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}
