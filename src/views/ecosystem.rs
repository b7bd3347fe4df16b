// Ecosystem Canvas - tokens, typed edges and the gestures that edit them
// All state is owned by one page view and discarded with it

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{debug, info};

use super::{FetchRequest, Loadable};
use crate::{
    core::{CanvasIdGenerator, EcosystemId, RelationshipId},
    error::{AppError, AppResult},
    models::{AnimalSummary, EcosystemAnimal, HabitatSummary, Relationship, RelationshipType},
};

/// Token coordinates are percentages kept inside this padded range.
pub const MIN_COORD: f64 = 5.0;
pub const MAX_COORD: f64 = 90.0;
/// Newly added tokens land somewhere in this range on each axis.
pub const SPAWN_RANGE: Range<f64> = 20.0..80.0;

pub fn clamp_coord(value: f64) -> f64 {
    if value.is_nan() {
        MIN_COORD
    } else {
        value.clamp(MIN_COORD, MAX_COORD)
    }
}

/// Bounding box of the canvas element in client pixels, captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    fn validate(&self) -> AppResult<()> {
        let finite = [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(AppError::BadRequest(format!(
                "canvas bounds must be finite with a positive size, got {:?}",
                self
            )));
        }
        Ok(())
    }

    /// Client point to clamped canvas percentages.
    pub fn to_percent(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        let x = (client_x - self.left) / self.width * 100.0;
        let y = (client_y - self.top) / self.height * 100.0;
        (clamp_coord(x), clamp_coord(y))
    }
}

/// Where the two-click connect gesture stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// No relationship mode; at most one token plainly selected.
    Idle { selected: Option<EcosystemId> },
    /// A relationship type is armed, waiting for the first token.
    Armed { kind: RelationshipType },
    /// First token picked; the next click on another token creates the edge.
    PendingSource {
        kind: RelationshipType,
        source: EcosystemId,
    },
}

impl Default for Interaction {
    fn default() -> Self {
        Interaction::Idle { selected: None }
    }
}

impl Interaction {
    pub fn mode(&self) -> Option<RelationshipType> {
        match self {
            Interaction::Idle { .. } => None,
            Interaction::Armed { kind } | Interaction::PendingSource { kind, .. } => Some(*kind),
        }
    }

    /// The highlighted token: the plain selection or the pending source.
    pub fn selected(&self) -> Option<&EcosystemId> {
        match self {
            Interaction::Idle { selected } => selected.as_ref(),
            Interaction::Armed { .. } => None,
            Interaction::PendingSource { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Plain selection toggled; holds the new selection.
    Selected(Option<EcosystemId>),
    SourcePicked(EcosystemId),
    Connected(Relationship),
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveDrag {
    token: EcosystemId,
    bounds: CanvasBounds,
}

#[derive(Debug, Clone, Default)]
pub struct EcosystemCanvas {
    tokens: Vec<EcosystemAnimal>,
    relationships: Vec<Relationship>,
    interaction: Interaction,
    drag: Option<ActiveDrag>,
    ids: CanvasIdGenerator,
}

impl EcosystemCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[EcosystemAnimal] {
        &self.tokens
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn token(&self, id: &EcosystemId) -> Option<&EcosystemAnimal> {
        self.tokens.iter().find(|t| &t.ecosystem_id == id)
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn mode(&self) -> Option<RelationshipType> {
        self.interaction.mode()
    }

    pub fn selected(&self) -> Option<&EcosystemId> {
        self.interaction.selected()
    }

    pub fn dragging(&self) -> Option<&EcosystemId> {
        self.drag.as_ref().map(|d| &d.token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Edges with both endpoints resolved; edges with a missing endpoint are skipped.
    pub fn resolved_edges(
        &self,
    ) -> impl Iterator<Item = (&Relationship, &EcosystemAnimal, &EcosystemAnimal)> {
        self.relationships.iter().filter_map(move |rel| {
            let from = self.token(&rel.from)?;
            let to = self.token(&rel.to)?;
            Some((rel, from, to))
        })
    }

    /// Places a token for `animal` at a random spot inside the spawn range.
    pub fn add_token(&mut self, animal: &AnimalSummary) -> &EcosystemAnimal {
        let mut rng = rand::rng();
        let x = rng.random_range(SPAWN_RANGE);
        let y = rng.random_range(SPAWN_RANGE);
        self.add_token_at(animal, x, y)
    }

    pub fn add_token_at(&mut self, animal: &AnimalSummary, x: f64, y: f64) -> &EcosystemAnimal {
        let id = EcosystemId::new(self.ids.next_id(&animal.id.to_string()));
        debug!("Adding token {} for {}", id, animal.name);

        let index = self.tokens.len();
        self.tokens.push(EcosystemAnimal::from_summary(
            animal,
            id,
            clamp_coord(x),
            clamp_coord(y),
        ));
        &self.tokens[index]
    }

    /// Removes a token and every edge that names it.
    pub fn remove_token(&mut self, id: &EcosystemId) -> AppResult<EcosystemAnimal> {
        let index = self
            .tokens
            .iter()
            .position(|t| &t.ecosystem_id == id)
            .ok_or_else(|| token_not_found(id))?;
        let removed = self.tokens.remove(index);

        let before = self.relationships.len();
        self.relationships.retain(|rel| !rel.touches(id));
        debug!(
            "Removed token {} and {} relationship(s)",
            id,
            before - self.relationships.len()
        );

        self.interaction = match std::mem::take(&mut self.interaction) {
            Interaction::Idle { selected } if selected.as_ref() == Some(id) => {
                Interaction::Idle { selected: None }
            }
            Interaction::PendingSource { kind, source } if &source == id => {
                Interaction::Armed { kind }
            }
            other => other,
        };

        if self.dragging() == Some(id) {
            self.drag = None;
        }

        Ok(removed)
    }

    /// Arms `kind`, or disarms it when it is already armed. Clears any selection.
    pub fn toggle_mode(&mut self, kind: RelationshipType) {
        self.interaction = if self.mode() == Some(kind) {
            Interaction::Idle { selected: None }
        } else {
            Interaction::Armed { kind }
        };
    }

    pub fn click_token(&mut self, id: &EcosystemId) -> AppResult<ClickOutcome> {
        if self.token(id).is_none() {
            return Err(token_not_found(id));
        }

        let (next, outcome) = match std::mem::take(&mut self.interaction) {
            Interaction::Idle { selected } => {
                let selected = if selected.as_ref() == Some(id) {
                    None
                } else {
                    Some(id.clone())
                };
                (
                    Interaction::Idle {
                        selected: selected.clone(),
                    },
                    ClickOutcome::Selected(selected),
                )
            }
            Interaction::Armed { kind } => (
                Interaction::PendingSource {
                    kind,
                    source: id.clone(),
                },
                ClickOutcome::SourcePicked(id.clone()),
            ),
            // Clicking the pending source again deselects it; the mode stays armed.
            Interaction::PendingSource { kind, source } if &source == id => {
                (Interaction::Armed { kind }, ClickOutcome::Selected(None))
            }
            Interaction::PendingSource { kind, source } => {
                let rel = self.connect(source, id.clone(), kind);
                (
                    Interaction::Idle { selected: None },
                    ClickOutcome::Connected(rel),
                )
            }
        };

        self.interaction = next;
        Ok(outcome)
    }

    fn connect(&mut self, from: EcosystemId, to: EcosystemId, kind: RelationshipType) -> Relationship {
        let id = RelationshipId::new(self.ids.next_id(&format!("{}-{}", from, to)));
        let rel = Relationship { id, from, to, kind };
        info!("Created {} relationship {}", kind, rel.id);
        self.relationships.push(rel.clone());
        rel
    }

    pub fn remove_relationship(&mut self, id: &RelationshipId) -> AppResult<Relationship> {
        let index = self
            .relationships
            .iter()
            .position(|rel| &rel.id == id)
            .ok_or_else(|| AppError::NotFound(format!("relationship {} is not on this canvas", id)))?;
        Ok(self.relationships.remove(index))
    }

    /// Starts dragging `token`. Returns `false` when the press landed on the
    /// token's remove button, which never starts a drag.
    ///
    /// A drag still active here lost its pointer-up (the page navigated
    /// before the end arrived), so the new press replaces it.
    pub fn begin_drag(
        &mut self,
        token: &EcosystemId,
        bounds: CanvasBounds,
        on_remove_button: bool,
    ) -> AppResult<bool> {
        if on_remove_button {
            return Ok(false);
        }
        if self.token(token).is_none() {
            return Err(token_not_found(token));
        }
        bounds.validate()?;
        if let Some(stale) = self.drag.take() {
            debug!("Dropping stale drag of token {}", stale.token);
        }

        self.drag = Some(ActiveDrag {
            token: token.clone(),
            bounds,
        });
        Ok(true)
    }

    /// Moves the dragged token to a client point. `None` when no drag is active.
    pub fn drag_to(&mut self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        let drag = self.drag.as_ref()?;
        let (x, y) = drag.bounds.to_percent(client_x, client_y);
        let token = self
            .tokens
            .iter_mut()
            .find(|t| t.ecosystem_id == drag.token)?;
        token.x = x;
        token.y = y;
        Some((x, y))
    }

    pub fn end_drag(&mut self) -> Option<EcosystemId> {
        self.drag.take().map(|d| d.token)
    }
}

fn token_not_found(id: &EcosystemId) -> AppError {
    AppError::NotFound(format!("token {} is not on this canvas", id))
}

/// Everything the builder page fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct EcosystemData {
    pub animals: Vec<AnimalSummary>,
    pub habitats: Vec<HabitatSummary>,
}

#[derive(Debug, Clone)]
pub struct EcosystemBuilderView {
    data: Loadable<EcosystemData>,
    selected_habitat: Option<i64>,
    canvas: EcosystemCanvas,
    show_helper: bool,
}

impl Default for EcosystemBuilderView {
    fn default() -> Self {
        Self::new()
    }
}

impl EcosystemBuilderView {
    pub fn new() -> Self {
        Self {
            data: Loadable::Loading,
            selected_habitat: None,
            canvas: EcosystemCanvas::new(),
            show_helper: false,
        }
    }

    pub fn fetch_request(&self) -> FetchRequest {
        FetchRequest::AnimalsAndHabitats
    }

    pub fn data(&self) -> &Loadable<EcosystemData> {
        &self.data
    }

    pub fn canvas(&self) -> &EcosystemCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut EcosystemCanvas {
        &mut self.canvas
    }

    pub fn show_helper(&self) -> bool {
        self.show_helper
    }

    pub fn begin_reload(&mut self) {
        self.data = Loadable::Loading;
    }

    pub fn apply_fetch(&mut self, result: AppResult<(Vec<AnimalSummary>, Vec<HabitatSummary>)>) {
        let result = result.map(|(animals, habitats)| EcosystemData { animals, habitats });
        self.data = Loadable::from_result(result, "Failed to load ecosystem data");

        if let Some(data) = self.data.ready() {
            let still_listed = self
                .selected_habitat
                .is_some_and(|id| data.habitats.iter().any(|h| h.id == id));
            if !still_listed {
                self.selected_habitat = data.habitats.first().map(|h| h.id);
            }
        }
    }

    pub fn current_habitat(&self) -> Option<&HabitatSummary> {
        let id = self.selected_habitat?;
        self.data.ready()?.habitats.iter().find(|h| h.id == id)
    }

    /// Switches the background habitat. Tokens and edges are untouched.
    pub fn select_habitat(&mut self, habitat_id: i64) -> AppResult<()> {
        let data = self.loaded()?;
        if !data.habitats.iter().any(|h| h.id == habitat_id) {
            return Err(AppError::NotFound(format!("habitat {} is not listed", habitat_id)));
        }
        self.selected_habitat = Some(habitat_id);
        Ok(())
    }

    /// Adds a token for a palette animal.
    pub fn add_animal(&mut self, animal_id: i64) -> AppResult<EcosystemId> {
        let animal = self
            .loaded()?
            .animals
            .iter()
            .find(|a| a.id == animal_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("animal {} is not in the palette", animal_id)))?;
        Ok(self.canvas.add_token(&animal).ecosystem_id.clone())
    }

    pub fn toggle_helper(&mut self) {
        self.show_helper = !self.show_helper;
    }

    fn loaded(&self) -> AppResult<&EcosystemData> {
        self.data
            .ready()
            .ok_or_else(|| AppError::BadRequest("ecosystem data is not loaded".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_api::{sample_animals, sample_habitats};

    fn summaries() -> Vec<AnimalSummary> {
        sample_animals().iter().map(|a| a.summary()).collect()
    }

    fn canvas_with_two() -> (EcosystemCanvas, EcosystemId, EcosystemId) {
        let animals = summaries();
        let mut canvas = EcosystemCanvas::new();
        let a = canvas.add_token_at(&animals[0], 20.0, 20.0).ecosystem_id.clone();
        let b = canvas.add_token_at(&animals[1], 60.0, 60.0).ecosystem_id.clone();
        (canvas, a, b)
    }

    #[test]
    fn test_spawn_position_inside_range() {
        let animals = summaries();
        let mut canvas = EcosystemCanvas::new();
        for _ in 0..50 {
            let token = canvas.add_token(&animals[0]);
            assert!(SPAWN_RANGE.contains(&token.x));
            assert!(SPAWN_RANGE.contains(&token.y));
        }
    }

    #[test]
    fn test_same_animal_twice_gets_distinct_ids() {
        let animals = summaries();
        let mut canvas = EcosystemCanvas::new();
        let a = canvas.add_token(&animals[0]).ecosystem_id.clone();
        let b = canvas.add_token(&animals[0]).ecosystem_id.clone();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("1-"));
    }

    #[test]
    fn test_plain_click_toggles_selection() {
        let (mut canvas, a, b) = canvas_with_two();
        assert_eq!(canvas.click_token(&a).unwrap(), ClickOutcome::Selected(Some(a.clone())));
        assert_eq!(canvas.click_token(&b).unwrap(), ClickOutcome::Selected(Some(b.clone())));
        assert_eq!(canvas.click_token(&b).unwrap(), ClickOutcome::Selected(None));
        assert!(canvas.relationships().is_empty());
    }

    #[test]
    fn test_connect_is_single_shot() {
        let (mut canvas, a, b) = canvas_with_two();
        canvas.toggle_mode(RelationshipType::PredatorPrey);
        canvas.click_token(&a).unwrap();
        let rel = match canvas.click_token(&b).unwrap() {
            ClickOutcome::Connected(rel) => rel,
            other => panic!("expected a relationship, got {:?}", other),
        };
        assert_eq!((rel.from.clone(), rel.to.clone()), (a.clone(), b.clone()));
        assert!(rel.id.as_str().starts_with(&format!("{}-{}-", a, b)));
        assert_eq!(canvas.interaction(), &Interaction::Idle { selected: None });

        // Mode is spent: the next click only selects.
        canvas.click_token(&a).unwrap();
        assert_eq!(canvas.relationships().len(), 1);
    }

    #[test]
    fn test_reclicking_pending_source_deselects_it() {
        let (mut canvas, a, b) = canvas_with_two();
        canvas.toggle_mode(RelationshipType::Competition);
        canvas.click_token(&a).unwrap();
        assert_eq!(canvas.click_token(&a).unwrap(), ClickOutcome::Selected(None));
        assert_eq!(
            canvas.interaction(),
            &Interaction::Armed {
                kind: RelationshipType::Competition
            }
        );
        assert!(canvas.relationships().is_empty());

        // Still armed, so a fresh pair connects
        canvas.click_token(&b).unwrap();
        canvas.click_token(&a).unwrap();
        assert_eq!(canvas.relationships().len(), 1);
    }

    #[test]
    fn test_toggle_mode_disarms_and_clears_selection() {
        let (mut canvas, a, _) = canvas_with_two();
        canvas.click_token(&a).unwrap();
        canvas.toggle_mode(RelationshipType::Mutualism);
        assert_eq!(canvas.selected(), None);
        canvas.toggle_mode(RelationshipType::Mutualism);
        assert_eq!(canvas.mode(), None);
    }

    #[test]
    fn test_removing_pending_source_returns_to_armed() {
        let (mut canvas, a, _) = canvas_with_two();
        canvas.toggle_mode(RelationshipType::Parasitism);
        canvas.click_token(&a).unwrap();
        canvas.remove_token(&a).unwrap();
        assert_eq!(
            canvas.interaction(),
            &Interaction::Armed {
                kind: RelationshipType::Parasitism
            }
        );
    }

    #[test]
    fn test_remove_token_cascades_edges() {
        let animals = summaries();
        let (mut canvas, a, b) = canvas_with_two();
        let c = canvas.add_token_at(&animals[2], 40.0, 40.0).ecosystem_id.clone();
        for (from, to) in [(&a, &b), (&b, &c), (&c, &a)] {
            canvas.toggle_mode(RelationshipType::Commensalism);
            canvas.click_token(from).unwrap();
            canvas.click_token(to).unwrap();
        }
        assert_eq!(canvas.relationships().len(), 3);

        canvas.remove_token(&a).unwrap();
        assert_eq!(canvas.relationships().len(), 1);
        assert!(canvas.relationships().iter().all(|r| !r.touches(&a)));
        assert!(canvas.remove_token(&a).is_err());
    }

    #[test]
    fn test_drag_clamps_and_ignores_remove_button() {
        let (mut canvas, a, _) = canvas_with_two();
        let bounds = CanvasBounds {
            left: 100.0,
            top: 50.0,
            width: 400.0,
            height: 200.0,
        };
        assert!(!canvas.begin_drag(&a, bounds, true).unwrap());
        assert_eq!(canvas.dragging(), None);

        assert!(canvas.begin_drag(&a, bounds, false).unwrap());
        assert_eq!(canvas.drag_to(300.0, 150.0), Some((50.0, 50.0)));
        assert_eq!(canvas.drag_to(-1_000.0, 10_000.0), Some((MIN_COORD, MAX_COORD)));
        assert_eq!(canvas.end_drag(), Some(a.clone()));
        assert_eq!(canvas.drag_to(300.0, 150.0), None);

        let token = canvas.token(&a).unwrap();
        assert_eq!((token.x, token.y), (MIN_COORD, MAX_COORD));
    }

    #[test]
    fn test_new_drag_replaces_a_stale_one() {
        let (mut canvas, a, b) = canvas_with_two();
        let bounds = CanvasBounds {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        };
        canvas.begin_drag(&a, bounds, false).unwrap();
        assert!(canvas.begin_drag(&b, bounds, false).unwrap());
        assert_eq!(canvas.dragging(), Some(&b));

        canvas.drag_to(50.0, 50.0);
        assert_eq!(canvas.end_drag(), Some(b));
        assert_eq!(canvas.end_drag(), None);
    }

    #[test]
    fn test_zero_size_bounds_rejected() {
        let (mut canvas, a, _) = canvas_with_two();
        let bounds = CanvasBounds {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 100.0,
        };
        assert!(matches!(canvas.begin_drag(&a, bounds, false), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_builder_selects_first_habitat_and_keeps_canvas_on_habitat_switch() {
        let mut view = EcosystemBuilderView::new();
        view.apply_fetch(Ok((summaries(), sample_habitats())));
        assert_eq!(view.current_habitat().map(|h| h.name.as_str()), Some("Arctic Tundra"));

        view.add_animal(2).unwrap();
        view.select_habitat(3).unwrap();
        assert_eq!(view.current_habitat().map(|h| h.name.as_str()), Some("Savanna"));
        assert_eq!(view.canvas().tokens().len(), 1);

        assert!(view.select_habitat(42).is_err());
        assert!(view.add_animal(42).is_err());
    }

    #[test]
    fn test_builder_failure_then_gesture_is_rejected() {
        let mut view = EcosystemBuilderView::new();
        view.apply_fetch(Err(AppError::Transport("connection refused".into())));
        assert_eq!(view.data().error(), Some("connection refused"));
        assert!(matches!(view.add_animal(1), Err(AppError::BadRequest(_))));
    }
}
