//! Zustandsautomat für das Ziehen von Kontrollpunkten.
//!
//! `Idle` → `Dragging(i)` beim Drücken über einer Pick-Kugel,
//! jede Bewegung verschiebt b_i in die Ebene z = 0 und klassifiziert neu,
//! Loslassen führt immer zurück nach `Idle`.

use super::state::SceneState;
use crate::core::{
    Classification, Classifier, ClassifyError, LoopBlinnClassifier, RayError, CONTROL_POINT_COUNT,
};
use crate::shared::PickPolicy;
use glam::{Vec2, Vec3};

/// Fehler während eines Drag-Schritts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DragError {
    /// Strahl oder Ebenenschnitt nicht berechenbar; es wurde nichts verschoben
    #[error("Strahl nicht auswertbar: {0}")]
    Ray(#[from] RayError),
    /// Punkt verschoben, aber die Kurve ist nicht klassifizierbar
    #[error("Klassifikation fehlgeschlagen: {0}")]
    Classify(#[from] ClassifyError),
}

/// Interaktionszustand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Kein Kontrollpunkt gegriffen
    #[default]
    Idle,
    /// Kontrollpunkt `index` wird gezogen
    Dragging {
        /// Index in b0..b3
        index: usize,
    },
}

impl InteractionState {
    /// Index des gezogenen Punkts, falls ein Drag läuft.
    pub fn dragged_index(self) -> Option<usize> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Dragging { index } => Some(index),
        }
    }
}

/// Steuert Picking und Drag der vier Kontrollpunkte.
pub struct InteractionController<C: Classifier = LoopBlinnClassifier> {
    state: InteractionState,
    classifier: C,
    pick_policy: PickPolicy,
}

impl Default for InteractionController<LoopBlinnClassifier> {
    fn default() -> Self {
        Self::new(LoopBlinnClassifier::new(), PickPolicy::default())
    }
}

impl<C: Classifier> InteractionController<C> {
    /// Erstellt einen Controller im Zustand `Idle`.
    pub fn new(classifier: C, pick_policy: PickPolicy) -> Self {
        Self {
            state: InteractionState::Idle,
            classifier,
            pick_policy,
        }
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Aktive Auswahlregel.
    pub fn pick_policy(&self) -> PickPolicy {
        self.pick_policy
    }

    /// Setzt die Auswahlregel für den nächsten Press.
    pub fn set_pick_policy(&mut self, policy: PickPolicy) {
        self.pick_policy = policy;
    }

    /// Verwendeter Klassifikator.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Ersetzt den Klassifikator (z.B. nach Optionsänderung).
    pub fn set_classifier(&mut self, classifier: C) {
        self.classifier = classifier;
    }

    /// Klassifiziert die komplette Kurve der Szene.
    pub fn classify(&self, scene: &SceneState) -> Result<Classification, ClassifyError> {
        self.classifier.classify(&scene.curve.homogeneous_points())
    }

    /// Primärtaste gedrückt: Pick-Test gegen alle Kontrollpunkte.
    ///
    /// Liefert den gegriffenen Index. Ein Press während eines Drags wird ignoriert.
    pub fn on_press(
        &mut self,
        scene: &mut SceneState,
        cursor: Vec2,
    ) -> Result<Option<usize>, RayError> {
        scene.cursor = cursor;
        if let InteractionState::Dragging { index } = self.state {
            log::debug!("Press ignoriert, Drag auf b{} läuft", index);
            return Ok(None);
        }

        let ray_dir = scene.ray_caster().viewport_to_world_ray(cursor)?;
        let picked = self.pick(scene, ray_dir);
        match picked {
            Some(index) => {
                log::info!("Drag gestartet: b{}", index);
                self.state = InteractionState::Dragging { index };
            }
            None => log::debug!("Kein Kontrollpunkt unter dem Cursor {:?}", cursor),
        }
        Ok(picked)
    }

    /// Cursor bewegt: gezogenen Punkt in die Ebene z = 0 verschieben und neu klassifizieren.
    ///
    /// `Ok(None)` im Zustand `Idle`; der Klassifikator läuft dann nicht.
    pub fn on_move(
        &mut self,
        scene: &mut SceneState,
        cursor: Vec2,
    ) -> Result<Option<Classification>, DragError> {
        scene.cursor = cursor;
        let InteractionState::Dragging { index } = self.state else {
            return Ok(None);
        };

        let ray = scene.ray_caster().cast(cursor)?;
        let target = ray.z_plane_intersection()?;

        if let Some(cp) = scene.curve.point_mut(index) {
            cp.move_to_world_position(target);
        }
        log::debug!("b{} → ({:.3}, {:.3}, {:.3})", index, target.x, target.y, target.z);

        Ok(Some(self.classify(scene)?))
    }

    /// Taste losgelassen: immer zurück nach `Idle`.
    pub fn on_release(&mut self) {
        if let InteractionState::Dragging { index } = self.state {
            log::info!("Drag beendet: b{}", index);
        }
        self.state = InteractionState::Idle;
    }

    /// `NearestHit` wertet nur Kugeln vor der Kamera aus (Abstand `t ≥ 0`).
    fn pick(&self, scene: &SceneState, ray_dir: Vec3) -> Option<usize> {
        let view = scene.view_matrix();
        let points = scene.curve.points();
        match self.pick_policy {
            PickPolicy::FirstHit => points.iter().position(|cp| cp.hit_test(ray_dir, view)),
            PickPolicy::NearestHit => (0..CONTROL_POINT_COUNT)
                .filter_map(|i| points[i].hit_distance(ray_dir, view).map(|t| (i, t)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(i, _)| i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Camera3D, CubicCurve};
    use glam::Vec4;
    use std::cell::Cell;

    /// Zählt Aufrufe und delegiert an den echten Klassifikator.
    #[derive(Default)]
    struct CountingClassifier {
        calls: Cell<usize>,
        inner: LoopBlinnClassifier,
    }

    impl Classifier for CountingClassifier {
        fn classify(&self, points: &[Vec4; 4]) -> Result<Classification, ClassifyError> {
            self.calls.set(self.calls.get() + 1);
            self.inner.classify(points)
        }
    }

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn scene() -> SceneState {
        SceneState::new(Camera3D::default(), VIEWPORT, CubicCurve::default())
    }

    fn screen_of(scene: &SceneState, index: usize) -> Vec2 {
        let world = scene.curve.points()[index].world_position();
        scene
            .camera
            .world_to_screen(world, scene.viewport_size)
            .expect("Kontrollpunkt vor der Kamera")
    }

    fn controller() -> InteractionController<CountingClassifier> {
        InteractionController::new(CountingClassifier::default(), PickPolicy::FirstHit)
    }

    #[test]
    fn test_press_on_handle_starts_drag() {
        let mut scene = scene();
        let mut ctrl = controller();
        let cursor = screen_of(&scene, 1);

        let picked = ctrl.on_press(&mut scene, cursor).expect("Strahl");

        assert_eq!(picked, Some(1));
        assert_eq!(ctrl.state(), InteractionState::Dragging { index: 1 });
        assert_eq!(scene.cursor, cursor);
        assert_eq!(ctrl.classifier().calls.get(), 0);
    }

    #[test]
    fn test_press_on_empty_space_stays_idle() {
        let mut scene = scene();
        let mut ctrl = controller();

        let picked = ctrl.on_press(&mut scene, Vec2::new(5.0, 5.0)).expect("Strahl");

        assert_eq!(picked, None);
        assert_eq!(ctrl.state(), InteractionState::Idle);
    }

    #[test]
    fn test_press_while_dragging_is_ignored() {
        let mut scene = scene();
        let mut ctrl = controller();
        let first = screen_of(&scene, 0);
        let second = screen_of(&scene, 3);

        ctrl.on_press(&mut scene, first).expect("Strahl");
        let picked = ctrl.on_press(&mut scene, second).expect("Strahl");

        assert_eq!(picked, None);
        assert_eq!(ctrl.state(), InteractionState::Dragging { index: 0 });
    }

    #[test]
    fn test_move_while_idle_does_not_classify() {
        let mut scene = scene();
        let mut ctrl = controller();
        let before = scene.curve.positions();

        let outcome = ctrl.on_move(&mut scene, Vec2::new(400.0, 300.0));

        assert_eq!(outcome, Ok(None));
        assert_eq!(ctrl.classifier().calls.get(), 0);
        assert_eq!(scene.curve.positions(), before);
    }

    #[test]
    fn test_move_drags_single_point_into_plane() {
        let mut scene = scene();
        let mut ctrl = controller();
        let before = scene.curve.positions();
        let cursor = screen_of(&scene, 2);
        ctrl.on_press(&mut scene, cursor).expect("Strahl");

        let outcome = ctrl
            .on_move(&mut scene, Vec2::new(400.0, 300.0))
            .expect("Drag-Schritt");

        assert!(outcome.is_some());
        assert_eq!(ctrl.classifier().calls.get(), 1);
        let after = scene.curve.positions();
        // Bildmitte liegt genau auf der Kameraachse → Ursprung
        assert!(after[2].length() < 1e-4);
        for i in [0, 1, 3] {
            assert_eq!(after[i], before[i]);
        }
    }

    #[test]
    fn test_classifier_runs_once_per_move() {
        let mut scene = scene();
        let mut ctrl = controller();
        let start = screen_of(&scene, 3);
        ctrl.on_press(&mut scene, start).expect("Strahl");

        for step in 1..=5 {
            ctrl.on_move(&mut scene, start + Vec2::new(step as f32 * 4.0, 0.0))
                .expect("Drag-Schritt");
        }
        ctrl.on_release();
        ctrl.on_move(&mut scene, start).expect("Idle-Move");

        assert_eq!(ctrl.classifier().calls.get(), 5);
    }

    #[test]
    fn test_failed_ray_moves_nothing() {
        let mut scene = scene();
        let mut ctrl = controller();
        let cursor = screen_of(&scene, 0);
        ctrl.on_press(&mut scene, cursor).expect("Strahl");
        let before = scene.curve.positions();

        scene.viewport_size = Vec2::ZERO;
        let outcome = ctrl.on_move(&mut scene, Vec2::new(10.0, 10.0));

        assert!(matches!(outcome, Err(DragError::Ray(RayError::EmptyViewport { .. }))));
        assert_eq!(scene.curve.positions(), before);
        assert_eq!(ctrl.classifier().calls.get(), 0);
    }

    #[test]
    fn test_release_always_returns_to_idle() {
        let mut scene = scene();
        let mut ctrl = controller();
        ctrl.on_release();
        assert_eq!(ctrl.state(), InteractionState::Idle);

        let cursor = screen_of(&scene, 1);
        ctrl.on_press(&mut scene, cursor).expect("Strahl");
        ctrl.on_release();
        assert_eq!(ctrl.state(), InteractionState::Idle);
    }

    #[test]
    fn test_pick_policy_first_vs_nearest() {
        // b0 und b1 liegen hintereinander auf der Kameraachse, b1 näher an der Kamera
        let curve = CubicCurve::new([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.8, 0.0, 0.0),
        ]);
        let center = VIEWPORT * 0.5;

        let mut scene = SceneState::new(Camera3D::default(), VIEWPORT, curve.clone());
        let mut first = controller();
        assert_eq!(first.on_press(&mut scene, center), Ok(Some(0)));

        let mut scene = SceneState::new(Camera3D::default(), VIEWPORT, curve);
        let mut nearest =
            InteractionController::new(CountingClassifier::default(), PickPolicy::NearestHit);
        assert_eq!(nearest.on_press(&mut scene, center), Ok(Some(1)));
    }

    #[test]
    fn test_nearest_hit_ignores_handle_behind_camera() {
        // b1 liegt auf der Kameraachse hinter der Kamera (z = 3)
        let curve = CubicCurve::new([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.8, 0.0, 0.0),
        ]);
        let mut scene = SceneState::new(Camera3D::default(), VIEWPORT, curve);
        let mut nearest =
            InteractionController::new(CountingClassifier::default(), PickPolicy::NearestHit);

        assert_eq!(nearest.on_press(&mut scene, VIEWPORT * 0.5), Ok(Some(0)));
    }
}
