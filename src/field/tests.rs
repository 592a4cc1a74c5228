use super::*;
use ultraviolet::Vec2;

#[test]
fn populate_consumes_samples_in_x_then_y_order() {
    let mut source = ScriptedPositions::new(vec![0.1, 0.2, 0.3, 0.4]);
    let field = ParticleField::populate(2, &mut source, DegeneratePolicy::Propagate).unwrap();
    assert_eq!(field.size(), 2);
    assert_eq!(field[0].pos, Vec2::new(0.1, 0.2));
    assert_eq!(field[1].pos, Vec2::new(0.3, 0.4));
    assert_eq!(source.consumed(), 4);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn populate_zeroes_forces_and_leaves_summary_unset() {
    let mut rng = seeded(1);
    let field = ParticleField::populate(16, &mut rng, DegeneratePolicy::Propagate).unwrap();
    for p in &field {
        assert_eq!(p.force, Vec2::zero());
        assert!(p.net.is_none());
    }
    assert!(!field.is_resolved());
}

#[test]
fn seeded_positions_lie_on_the_unit_square() {
    let mut rng = seeded(1);
    let field = ParticleField::populate(500, &mut rng, DegeneratePolicy::Propagate).unwrap();
    for p in field.iter() {
        assert!((0.0..1.0).contains(&p.pos.x), "x out of range: {}", p.pos.x);
        assert!((0.0..1.0).contains(&p.pos.y), "y out of range: {}", p.pos.y);
    }
}

#[test]
fn same_seed_gives_same_field() {
    let a = ParticleField::populate(64, &mut seeded(7), DegeneratePolicy::Propagate).unwrap();
    let b = ParticleField::populate(64, &mut seeded(7), DegeneratePolicy::Propagate).unwrap();
    assert_eq!(a, b);
}

#[test]
fn exhausted_source_reports_shortfall() {
    let mut source = ScriptedPositions::from_points(&[(0.1, 0.1)]);
    let err = ParticleField::populate(3, &mut source, DegeneratePolicy::Propagate).unwrap_err();
    match err {
        Error::SourceExhausted {
            requested,
            supplied,
        } => {
            assert_eq!(requested, 6);
            assert_eq!(supplied, 2);
        }
        other => panic!("expected SourceExhausted, got {other:?}"),
    }
}

#[test]
fn duplicates_are_kept_when_propagating() {
    let field = ParticleField::from_positions(
        [(0.5, 0.5), (0.2, 0.3), (0.5, 0.5)],
        DegeneratePolicy::Propagate,
    )
    .unwrap();
    assert_eq!(field.len(), 3);
}

#[test]
fn duplicates_are_refused_when_rejecting() {
    let mut source = ScriptedPositions::from_points(&[(0.5, 0.5), (0.2, 0.3), (0.5, 0.5)]);
    let err = ParticleField::populate(3, &mut source, DegeneratePolicy::Reject).unwrap_err();
    match err {
        Error::DuplicatePosition { first, second, .. } => {
            assert_eq!((first, second), (0, 2));
        }
        other => panic!("expected DuplicatePosition, got {other:?}"),
    }
}

#[test]
fn signed_zeros_count_as_the_same_position() {
    let err = ParticleField::from_positions([(0.0, 0.3), (-0.0, 0.3)], DegeneratePolicy::Reject)
        .unwrap_err();
    assert!(matches!(err, Error::DuplicatePosition { .. }));
}

#[test]
fn distinct_positions_pass_rejection() {
    let field = ParticleField::from_positions(
        [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
        DegeneratePolicy::Reject,
    )
    .unwrap();
    assert_eq!(field.positions().collect::<Vec<_>>().len(), 3);
}
