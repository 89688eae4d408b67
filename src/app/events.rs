//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::shared::PickPolicy;
use glam::Vec2;

/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste
    Primary,
    /// Rechte Taste
    Secondary,
    /// Mittlere Taste
    Middle,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Maustaste im Viewport gedrückt (Pixel relativ zum Viewport)
    PointerPressed {
        screen_pos: Vec2,
        button: PointerButton,
    },
    /// Cursor im Viewport bewegt
    PointerMoved { screen_pos: Vec2 },
    /// Maustaste losgelassen
    PointerReleased { button: PointerButton },
    /// Kurve auf Startwerte zurücksetzen
    ResetCurveRequested,
    /// Auswahlregel für das Picking ändern
    PickPolicyChanged { policy: PickPolicy },
    /// Orientierungskorrektur im Schleifen-Zweig umschalten
    LoopOrientationToggled { enabled: bool },
    /// Anwendung beenden
    ExitRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Cursor-Position ohne Drag übernehmen
    UpdateCursor { screen_pos: Vec2 },
    /// Pick-Test und ggf. Drag starten
    BeginHandleDrag { screen_pos: Vec2 },
    /// Gezogenen Kontrollpunkt verschieben und neu klassifizieren
    DragHandle { screen_pos: Vec2 },
    /// Drag beenden
    EndHandleDrag,
    /// Kurve zurücksetzen und neu klassifizieren
    ResetCurve,
    /// Auswahlregel setzen und speichern
    SetPickPolicy { policy: PickPolicy },
    /// Loop-Orientierung setzen, speichern und neu klassifizieren
    SetLoopOrientation { enabled: bool },
    /// Anwendung beenden
    RequestExit,
}
