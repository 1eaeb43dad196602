//! Unit tests for the waypoint service.

use npc_core::{PathTier, Point3};

use crate::Pathfinder;

fn assert_close(got: Point3, want: Point3) {
    assert!(
        got.distance(want) < 1e-4,
        "expected {want}, got {got}"
    );
}

#[test]
fn basic_tier_is_direct_segment() {
    let pf = Pathfinder::new(PathTier::Basic);
    let start = Point3::ORIGIN;
    let end = Point3::new(10.0, 0.0, 0.0);
    let path = pf.find_path(start, end).unwrap();
    assert_eq!(path, vec![start, end]);
}

#[test]
fn advanced_tier_inserts_two_waypoints() {
    let pf = Pathfinder::new(PathTier::Advanced);
    let path = pf
        .find_path(Point3::ORIGIN, Point3::new(10.0, 0.0, 0.0))
        .unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path[0], Point3::ORIGIN);
    assert_close(path[1], Point3::new(3.3, 0.0, 0.0));
    assert_close(path[2], Point3::new(6.6, 0.0, 0.0));
    assert_eq!(path[3], Point3::new(10.0, 0.0, 0.0));
}

#[test]
fn navmesh_tier_matches_advanced_density() {
    let start = Point3::new(1.0, 2.0, 3.0);
    let end = Point3::new(-5.0, 0.0, 9.0);
    let adv = Pathfinder::new(PathTier::Advanced).find_path(start, end).unwrap();
    let nav = Pathfinder::new(PathTier::NavMesh).find_path(start, end).unwrap();
    assert_eq!(adv, nav);
}

#[test]
fn waypoints_interpolate_all_axes() {
    let pf = Pathfinder::new(PathTier::Advanced);
    let start = Point3::new(0.0, 10.0, -10.0);
    let end = Point3::new(10.0, 0.0, 10.0);
    let path = pf.find_path(start, end).unwrap();
    assert_close(path[1], Point3::new(3.3, 6.7, -3.4));
    assert_close(path[2], Point3::new(6.6, 3.4, 3.2));
}

#[test]
fn set_tier_takes_effect_immediately() {
    let mut pf = Pathfinder::new(PathTier::Basic);
    let start = Point3::ORIGIN;
    let end = Point3::new(1.0, 1.0, 1.0);
    assert_eq!(pf.find_path(start, end).unwrap().len(), 2);
    pf.set_tier(PathTier::NavMesh);
    assert_eq!(pf.find_path(start, end).unwrap().len(), 4);
    pf.set_tier(PathTier::Basic);
    assert_eq!(pf.find_path(start, end).unwrap().len(), 2);
}

#[test]
fn non_finite_input_is_rejected() {
    let pf = Pathfinder::default();
    let bad = Point3::new(f32::NAN, 0.0, 0.0);
    assert!(pf.find_path(bad, Point3::ORIGIN).is_err());
    assert!(pf.find_path(Point3::ORIGIN, bad).is_err());
    let inf = Point3::new(0.0, f32::INFINITY, 0.0);
    assert!(pf.find_path(Point3::ORIGIN, inf).is_err());
}

#[test]
fn find_path_is_pure() {
    let pf = Pathfinder::new(PathTier::Advanced);
    let start = Point3::new(2.0, 4.0, 6.0);
    let end = Point3::new(-1.0, -2.0, -3.0);
    let a = pf.find_path(start, end).unwrap();
    let b = pf.find_path(start, end).unwrap();
    assert_eq!(a, b);
}

#[test]
fn drain_pending_is_a_safe_noop() {
    let pf = Pathfinder::default();
    for _ in 0..1000 {
        pf.drain_pending();
    }
}

#[test]
fn default_falls_back_to_basic() {
    assert_eq!(Pathfinder::default().tier(), PathTier::Basic);
}
