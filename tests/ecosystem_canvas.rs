use std::collections::HashSet;

use animaldex_web::{
    core::EcosystemId,
    infrastructure::memory_api::sample_animals,
    models::{AnimalSummary, RelationshipType},
    views::{CanvasBounds, ClickOutcome, EcosystemCanvas, Interaction},
    AppError,
};
use proptest::prelude::*;

fn animals() -> Vec<AnimalSummary> {
    sample_animals().iter().map(|a| a.summary()).collect()
}

fn bounds() -> CanvasBounds {
    CanvasBounds {
        left: 100.0,
        top: 50.0,
        width: 500.0,
        height: 400.0,
    }
}

#[test]
fn test_mutualism_between_two_tokens() {
    let animals = animals();
    let mut canvas = EcosystemCanvas::new();
    let fox = canvas.add_token_at(&animals[0], 30.0, 30.0).ecosystem_id.clone();
    let wolf = canvas.add_token_at(&animals[1], 60.0, 40.0).ecosystem_id.clone();

    canvas.toggle_mode(RelationshipType::Mutualism);
    assert_eq!(
        *canvas.interaction(),
        Interaction::Armed {
            kind: RelationshipType::Mutualism
        }
    );

    assert_eq!(
        canvas.click_token(&fox).unwrap(),
        ClickOutcome::SourcePicked(fox.clone())
    );
    assert_eq!(canvas.selected(), Some(&fox));

    let rel = match canvas.click_token(&wolf).unwrap() {
        ClickOutcome::Connected(rel) => rel,
        other => panic!("expected a new relationship, got {:?}", other),
    };
    assert_eq!(rel.from, fox);
    assert_eq!(rel.to, wolf);
    assert_eq!(rel.kind, RelationshipType::Mutualism);

    // Connecting drops back to idle with nothing selected
    assert_eq!(*canvas.interaction(), Interaction::Idle { selected: None });
    assert_eq!(canvas.relationships().len(), 1);
    assert_eq!(canvas.resolved_edges().count(), 1);

    canvas.remove_token(&fox).unwrap();
    assert!(canvas.relationships().is_empty());
    assert_eq!(canvas.tokens().len(), 1);
}

#[test]
fn test_parallel_edges_of_different_kinds_are_kept() {
    let animals = animals();
    let mut canvas = EcosystemCanvas::new();
    let a = canvas.add_token_at(&animals[0], 20.0, 20.0).ecosystem_id.clone();
    let b = canvas.add_token_at(&animals[2], 70.0, 70.0).ecosystem_id.clone();

    for kind in [RelationshipType::PredatorPrey, RelationshipType::Competition] {
        canvas.toggle_mode(kind);
        canvas.click_token(&a).unwrap();
        canvas.click_token(&b).unwrap();
    }

    let kinds: Vec<_> = canvas.relationships().iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![RelationshipType::PredatorPrey, RelationshipType::Competition]);
    let ids: HashSet<_> = canvas.relationships().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_drag_moves_token_in_canvas_percentages() {
    let animals = animals();
    let mut canvas = EcosystemCanvas::new();
    let token = canvas.add_token_at(&animals[0], 30.0, 30.0).ecosystem_id.clone();

    assert!(canvas.begin_drag(&token, bounds(), false).unwrap());
    assert_eq!(canvas.dragging(), Some(&token));

    // Center of the box
    assert_eq!(canvas.drag_to(350.0, 250.0), Some((50.0, 50.0)));
    // Far outside the box clamps to the edges
    assert_eq!(canvas.drag_to(0.0, 10_000.0), Some((5.0, 90.0)));

    let placed = canvas.token(&token).unwrap();
    assert_eq!((placed.x, placed.y), (5.0, 90.0));

    assert_eq!(canvas.end_drag(), Some(token));
    assert_eq!(canvas.drag_to(350.0, 250.0), None);
    assert_eq!(canvas.end_drag(), None);
}

#[test]
fn test_remove_button_press_never_starts_a_drag() {
    let animals = animals();
    let mut canvas = EcosystemCanvas::new();
    let token = canvas.add_token(&animals[1]).ecosystem_id.clone();

    assert!(!canvas.begin_drag(&token, bounds(), true).unwrap());
    assert_eq!(canvas.dragging(), None);
}

#[test]
fn test_press_after_lost_pointer_up_starts_a_fresh_drag() {
    let animals = animals();
    let mut canvas = EcosystemCanvas::new();
    let a = canvas.add_token_at(&animals[0], 30.0, 30.0).ecosystem_id.clone();
    let b = canvas.add_token_at(&animals[1], 60.0, 60.0).ecosystem_id.clone();

    // The end for this drag never arrives
    canvas.begin_drag(&a, bounds(), false).unwrap();
    assert!(canvas.begin_drag(&b, bounds(), false).unwrap());
    assert_eq!(canvas.dragging(), Some(&b));

    // Moves now go to the new token only
    assert_eq!(canvas.drag_to(350.0, 250.0), Some((50.0, 50.0)));
    let untouched = canvas.token(&a).unwrap();
    assert_eq!((untouched.x, untouched.y), (30.0, 30.0));
    assert_eq!(canvas.end_drag(), Some(b));
}

#[test]
fn test_degenerate_bounds_are_rejected() {
    let animals = animals();
    let mut canvas = EcosystemCanvas::new();
    let token = canvas.add_token(&animals[0]).ecosystem_id.clone();

    let flat = CanvasBounds {
        height: 0.0,
        ..bounds()
    };
    let err = canvas.begin_drag(&token, flat, false).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)), "got {:?}", err);
    assert_eq!(canvas.dragging(), None);
}

#[test]
fn test_removing_pending_source_keeps_mode_armed() {
    let animals = animals();
    let mut canvas = EcosystemCanvas::new();
    let a = canvas.add_token(&animals[0]).ecosystem_id.clone();
    canvas.add_token(&animals[1]);

    canvas.toggle_mode(RelationshipType::Parasitism);
    canvas.click_token(&a).unwrap();
    canvas.remove_token(&a).unwrap();

    assert_eq!(
        *canvas.interaction(),
        Interaction::Armed {
            kind: RelationshipType::Parasitism
        }
    );
}

#[test]
fn test_removing_dragged_token_ends_the_drag() {
    let animals = animals();
    let mut canvas = EcosystemCanvas::new();
    let a = canvas.add_token(&animals[0]).ecosystem_id.clone();

    canvas.begin_drag(&a, bounds(), false).unwrap();
    canvas.remove_token(&a).unwrap();
    assert_eq!(canvas.dragging(), None);
    assert_eq!(canvas.drag_to(200.0, 200.0), None);
}

#[test]
fn test_unknown_token_is_not_found() {
    let mut canvas = EcosystemCanvas::new();
    let ghost = EcosystemId::new("9-0");
    assert!(matches!(canvas.click_token(&ghost), Err(AppError::NotFound(_))));
    assert!(matches!(canvas.remove_token(&ghost), Err(AppError::NotFound(_))));
    assert!(matches!(
        canvas.begin_drag(&ghost, bounds(), false),
        Err(AppError::NotFound(_))
    ));
}

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
    Click(usize),
    Mode(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..3).prop_map(Op::Add),
        1 => any::<usize>().prop_map(Op::Remove),
        3 => any::<usize>().prop_map(Op::Click),
        1 => (0usize..RelationshipType::ALL.len()).prop_map(Op::Mode),
    ]
}

fn pick(canvas: &EcosystemCanvas, index: usize) -> Option<EcosystemId> {
    let tokens = canvas.tokens();
    if tokens.is_empty() {
        None
    } else {
        Some(tokens[index % tokens.len()].ecosystem_id.clone())
    }
}

proptest! {
    #[test]
    fn prop_token_count_tracks_adds_and_removes(ops in prop::collection::vec(op(), 0..60)) {
        let animals = animals();
        let mut canvas = EcosystemCanvas::new();
        let mut expected = 0usize;

        for op in ops {
            match op {
                Op::Add(i) => {
                    canvas.add_token(&animals[i]);
                    expected += 1;
                }
                Op::Remove(i) => {
                    if let Some(id) = pick(&canvas, i) {
                        canvas.remove_token(&id).unwrap();
                        expected -= 1;
                    }
                }
                Op::Click(i) => {
                    if let Some(id) = pick(&canvas, i) {
                        canvas.click_token(&id).unwrap();
                    }
                }
                Op::Mode(i) => canvas.toggle_mode(RelationshipType::ALL[i]),
            }

            prop_assert_eq!(canvas.tokens().len(), expected);
            let ids: HashSet<_> = canvas.tokens().iter().map(|t| t.ecosystem_id.clone()).collect();
            prop_assert_eq!(ids.len(), expected);
        }
    }

    #[test]
    fn prop_edges_never_dangle(ops in prop::collection::vec(op(), 0..80)) {
        let animals = animals();
        let mut canvas = EcosystemCanvas::new();

        for op in ops {
            match op {
                Op::Add(i) => {
                    canvas.add_token(&animals[i]);
                }
                Op::Remove(i) => {
                    if let Some(id) = pick(&canvas, i) {
                        canvas.remove_token(&id).unwrap();
                    }
                }
                Op::Click(i) => {
                    if let Some(id) = pick(&canvas, i) {
                        canvas.click_token(&id).unwrap();
                    }
                }
                Op::Mode(i) => canvas.toggle_mode(RelationshipType::ALL[i]),
            }

            for rel in canvas.relationships() {
                prop_assert!(canvas.token(&rel.from).is_some());
                prop_assert!(canvas.token(&rel.to).is_some());
                prop_assert_ne!(&rel.from, &rel.to);
            }
            if let Some(selected) = canvas.selected() {
                prop_assert!(canvas.token(selected).is_some());
            }
            prop_assert_eq!(canvas.resolved_edges().count(), canvas.relationships().len());
        }
    }

    #[test]
    fn prop_positions_stay_inside_the_canvas(
        x in -1_000.0f64..1_000.0,
        y in -1_000.0f64..1_000.0,
        client_x in -5_000.0f64..5_000.0,
        client_y in -5_000.0f64..5_000.0,
    ) {
        let animals = animals();
        let mut canvas = EcosystemCanvas::new();
        let token = canvas.add_token_at(&animals[0], x, y).ecosystem_id.clone();
        let placed = canvas.token(&token).unwrap();
        prop_assert!((5.0..=90.0).contains(&placed.x));
        prop_assert!((5.0..=90.0).contains(&placed.y));

        canvas.begin_drag(&token, bounds(), false).unwrap();
        let (dx, dy) = canvas.drag_to(client_x, client_y).unwrap();
        prop_assert!((5.0..=90.0).contains(&dx));
        prop_assert!((5.0..=90.0).contains(&dy));
    }
}
