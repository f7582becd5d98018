// ─────────────────────────────────────────────────────────────────────
// DECIDE — Launch Interceptor Conditions
// ─────────────────────────────────────────────────────────────────────
//! The condition bank: one pure predicate per implemented slot.
//!
//! Every evaluator scans the trajectory for the first qualifying
//! consecutive tuple or window and returns `true` as soon as one is
//! found. Parameters are checked before the scan, so an out-of-domain
//! parameter fails even when the trajectory is too short to scan.

use std::f64::consts::PI;

use decide_geometry::{almost_equal_within, exceeds, Point, Triangle};
use decide_types::{DecideResult, LicParameters, NUM_LICS};

/// Signature shared by every condition evaluator.
pub type Evaluator = fn(&[Point], &LicParameters) -> DecideResult<bool>;

/// The fifteen condition slots. Slots 7 to 14 are reserved and have no
/// evaluator; they always report unmet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Lic {
    Length = 0,
    Radius = 1,
    Angle = 2,
    Area = 3,
    Quadrants = 4,
    XReversal = 5,
    ChordDistance = 6,
    Reserved7 = 7,
    Reserved8 = 8,
    Reserved9 = 9,
    Reserved10 = 10,
    Reserved11 = 11,
    Reserved12 = 12,
    Reserved13 = 13,
    Reserved14 = 14,
}

impl Lic {
    pub const ALL: [Lic; NUM_LICS] = [
        Lic::Length,
        Lic::Radius,
        Lic::Angle,
        Lic::Area,
        Lic::Quadrants,
        Lic::XReversal,
        Lic::ChordDistance,
        Lic::Reserved7,
        Lic::Reserved8,
        Lic::Reserved9,
        Lic::Reserved10,
        Lic::Reserved11,
        Lic::Reserved12,
        Lic::Reserved13,
        Lic::Reserved14,
    ];

    /// Slot index in the CMV.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Lic> {
        Self::ALL.get(index).copied()
    }

    pub fn evaluator(self) -> Option<Evaluator> {
        match self {
            Lic::Length => Some(lic_length),
            Lic::Radius => Some(lic_radius),
            Lic::Angle => Some(lic_angle),
            Lic::Area => Some(lic_area),
            Lic::Quadrants => Some(lic_quadrants),
            Lic::XReversal => Some(lic_x_reversal),
            Lic::ChordDistance => Some(lic_chord_distance),
            _ => None,
        }
    }

    pub fn is_implemented(self) -> bool {
        self.evaluator().is_some()
    }

    pub fn description(self) -> &'static str {
        match self {
            Lic::Length => "two consecutive points more than LENGTH1 apart",
            Lic::Radius => "three consecutive points not contained in a circle of radius RADIUS1",
            Lic::Angle => "three consecutive points forming an angle outside PI ± EPSILON",
            Lic::Area => "three consecutive points forming a triangle with area above AREA1",
            Lic::Quadrants => "Q_PTS consecutive points lying in more than QUADS quadrants",
            Lic::XReversal => "two consecutive points where x decreases",
            Lic::ChordDistance => {
                "a point of N_PTS consecutive points farther than DIST from their chord"
            }
            _ => "reserved",
        }
    }
}

/// Evaluate one condition. Reserved slots are `Ok(false)`.
pub fn evaluate(lic: Lic, points: &[Point], params: &LicParameters) -> DecideResult<bool> {
    match lic.evaluator() {
        Some(evaluator) => evaluator(points, params),
        None => Ok(false),
    }
}

fn met(lic: Lic, start: usize) -> DecideResult<bool> {
    log::debug!("LIC {} met at point {start}", lic.index());
    Ok(true)
}

/// LIC 0: some consecutive pair is more than `length1` apart.
pub fn lic_length(points: &[Point], params: &LicParameters) -> DecideResult<bool> {
    params.check_length1()?;
    for (i, pair) in points.windows(2).enumerate() {
        if pair[0].distance(&pair[1]) > params.length1 {
            return met(Lic::Length, i);
        }
    }
    Ok(false)
}

/// LIC 1: some consecutive triple has circumradius beyond `radius1`.
/// Radii within tolerance of the threshold do not count.
pub fn lic_radius(points: &[Point], params: &LicParameters) -> DecideResult<bool> {
    params.check_radius1()?;
    for (i, triple) in points.windows(3).enumerate() {
        let radius = Triangle::new(triple[0], triple[1], triple[2]).circumradius();
        if exceeds(radius, params.radius1) {
            return met(Lic::Radius, i);
        }
    }
    Ok(false)
}

/// LIC 2: the directed angle at the middle point of some consecutive
/// triple is not within `epsilon` of pi. A triple whose vertex
/// coincides with either neighbour has no angle and is skipped.
pub fn lic_angle(points: &[Point], params: &LicParameters) -> DecideResult<bool> {
    params.check_epsilon()?;
    for (i, triple) in points.windows(3).enumerate() {
        let (first, vertex, last) = (triple[0], triple[1], triple[2]);
        if vertex == first || vertex == last {
            continue;
        }
        let angle = Triangle::new(first, vertex, last).angle_at_b();
        if !almost_equal_within(PI, angle, params.epsilon) {
            return met(Lic::Angle, i);
        }
    }
    Ok(false)
}

/// LIC 3: some consecutive triple spans an area above `area1`.
pub fn lic_area(points: &[Point], params: &LicParameters) -> DecideResult<bool> {
    params.check_area1()?;
    for (i, triple) in points.windows(3).enumerate() {
        if Triangle::new(triple[0], triple[1], triple[2]).area() > params.area1 {
            return met(Lic::Area, i);
        }
    }
    Ok(false)
}

/// LIC 4: some `q_pts` consecutive points touch more than `quads`
/// distinct quadrants.
///
/// Keeps the quadrants of the last `q_pts` points in a ring and
/// recounts the distinct set after every point, O(N·Q).
pub fn lic_quadrants(points: &[Point], params: &LicParameters) -> DecideResult<bool> {
    params.check_quadrant_window(points.len())?;
    let q_pts = params.q_pts;
    let mut ring = vec![None; q_pts];

    for (i, point) in points.iter().enumerate() {
        ring[i % q_pts] = Some(point.quadrant());
        let seen = ring.iter().flatten().fold(0u8, |mask, q| mask | q.bit());
        if seen.count_ones() as usize > params.quads {
            return met(Lic::Quadrants, (i + 1).saturating_sub(q_pts));
        }
    }
    Ok(false)
}

/// LIC 5: some consecutive pair moves strictly toward smaller x.
pub fn lic_x_reversal(points: &[Point], _params: &LicParameters) -> DecideResult<bool> {
    for (i, pair) in points.windows(2).enumerate() {
        if pair[1].x < pair[0].x {
            return met(Lic::XReversal, i);
        }
    }
    Ok(false)
}

/// LIC 6: some interior point of a window of `n_pts` consecutive
/// points lies farther than `dist` from the line through the window's
/// endpoints, or from the endpoint itself when the endpoints coincide.
///
/// `n_pts` below 3 leaves no interior point, so the condition is
/// unmet rather than rejected.
pub fn lic_chord_distance(points: &[Point], params: &LicParameters) -> DecideResult<bool> {
    params.check_chord_window(points.len())?;
    if params.n_pts < 3 {
        return Ok(false);
    }

    for (i, window) in points.windows(params.n_pts).enumerate() {
        let first = window[0];
        let last = window[window.len() - 1];
        for &interior in &window[1..window.len() - 1] {
            let deviation = Triangle::new(first, last, interior).height_from_c();
            if deviation > params.dist {
                return met(Lic::ChordDistance, i);
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use decide_types::DecideError;

    use super::*;

    fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn params() -> LicParameters {
        LicParameters {
            length1: 2.0,
            radius1: 1.0,
            epsilon: PI / 2.0,
            area1: 2.0,
            q_pts: 3,
            quads: 1,
            n_pts: 3,
            dist: 1.5,
        }
    }

    // ── catalogue ─────────────────────────────────────────────────

    #[test]
    fn test_catalogue_indices() {
        for (i, lic) in Lic::ALL.iter().enumerate() {
            assert_eq!(lic.index(), i);
            assert_eq!(Lic::from_index(i), Some(*lic));
        }
        assert_eq!(Lic::from_index(NUM_LICS), None);
    }

    #[test]
    fn test_only_first_seven_implemented() {
        let implemented: Vec<usize> = Lic::ALL
            .iter()
            .filter(|lic| lic.is_implemented())
            .map(|lic| lic.index())
            .collect();
        assert_eq!(implemented, (0..7).collect::<Vec<_>>());
        assert_eq!(Lic::Reserved12.description(), "reserved");
    }

    #[test]
    fn test_reserved_slot_is_unmet_even_with_bad_params() {
        let mut p = params();
        p.epsilon = -1.0;
        assert_eq!(evaluate(Lic::Reserved9, &[], &p), Ok(false));
    }

    // ── LIC 0 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic0_met() {
        let p = LicParameters { length1: 2.0, ..params() };
        assert!(lic_length(&pts(&[[0.0, 0.0], [1.0, 1.0], [3.0, 3.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic0_not_met() {
        let p = LicParameters { length1: 2.0, ..params() };
        assert!(!lic_length(&pts(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic0_short_trajectory() {
        let p = LicParameters { length1: 0.0, ..params() };
        assert!(!lic_length(&[], &p).unwrap());
        assert!(!lic_length(&pts(&[[100.0, 100.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic0_equal_distance_not_met() {
        let p = LicParameters { length1: 5.0, ..params() };
        assert!(!lic_length(&pts(&[[0.0, 0.0], [3.0, 4.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic0_negative_length_rejected() {
        let p = LicParameters { length1: -1.0, ..params() };
        assert!(lic_length(&[], &p).unwrap_err().is_invalid_parameter());
    }

    // ── LIC 1 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic1_met() {
        let p = LicParameters { radius1: 1.0, ..params() };
        assert!(lic_radius(&pts(&[[0.0, 0.0], [1.0, 0.0], [10.0, 2.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic1_not_met() {
        let p = LicParameters { radius1: 3.0, ..params() };
        assert!(!lic_radius(&pts(&[[0.0, 0.0], [0.0, 4.0], [2.0, 2.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic1_within_tolerance_not_met() {
        // Circumradius of this right triangle is 2 up to rounding.
        let p = LicParameters { radius1: 2.0, ..params() };
        assert!(!lic_radius(&pts(&[[0.0, 0.0], [0.0, 4.0], [2.0, 2.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic1_collinear_uses_longest_side() {
        let p = LicParameters { radius1: 3.0, ..params() };
        let line = pts(&[[0.0, 0.0], [1.0, 0.0], [4.0, 0.0]]);
        assert!(lic_radius(&line, &p).unwrap());
        let p = LicParameters { radius1: 4.0, ..params() };
        assert!(!lic_radius(&line, &p).unwrap());
    }

    #[test]
    fn test_lic1_straight_line_uses_longest_side() {
        // Heron rounding on these lines must not inflate the radius.
        let p = LicParameters { radius1: 100.0, ..params() };
        assert!(!lic_radius(&pts(&[[0.0, 0.0], [1.0, 1.0], [6.0, 6.0]]), &p).unwrap());
        assert!(!lic_radius(&pts(&[[0.0, 0.0], [1.0, 3.0], [4.0, 12.0]]), &p).unwrap());

        let p = LicParameters { radius1: 8.0, ..params() };
        assert!(lic_radius(&pts(&[[0.0, 0.0], [1.0, 1.0], [6.0, 6.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic1_short_trajectory() {
        let p = LicParameters { radius1: 0.0, ..params() };
        assert!(!lic_radius(&pts(&[[0.0, 0.0], [50.0, 50.0]]), &p).unwrap());
    }

    // ── LIC 2 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic2_right_angle_met() {
        let p = LicParameters { epsilon: 0.1, ..params() };
        assert!(lic_angle(&pts(&[[0.0, 1.0], [0.0, 0.0], [1.0, 0.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic2_straight_line_not_met() {
        let p = LicParameters { epsilon: 0.1, ..params() };
        assert!(!lic_angle(&pts(&[[-1.0, 0.0], [0.0, 0.0], [1.0, 0.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic2_deviation_equal_to_epsilon_is_met() {
        // Angle 3π/2 deviates from π by exactly π/2.
        let p = LicParameters { epsilon: PI / 2.0, ..params() };
        assert!(lic_angle(&pts(&[[2.0, 0.0], [3.0, 0.0], [3.0, 3.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic2_coincident_vertex_skipped() {
        for epsilon in [0.0, 0.5, 3.0] {
            let p = LicParameters { epsilon, ..params() };
            assert!(!lic_angle(&pts(&[[0.0, 0.0], [0.0, 0.0], [2.0, 2.0]]), &p).unwrap());
            assert!(!lic_angle(&pts(&[[1.0, 5.0], [2.0, 2.0], [2.0, 2.0]]), &p).unwrap());
        }
    }

    #[test]
    fn test_lic2_skips_then_finds_later_triple() {
        let p = LicParameters { epsilon: 0.1, ..params() };
        let trajectory = pts(&[[0.0, 0.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        assert!(lic_angle(&trajectory, &p).unwrap());
    }

    #[test]
    fn test_lic2_epsilon_domain() {
        for epsilon in [-0.01, PI, 4.0, f64::NAN] {
            let p = LicParameters { epsilon, ..params() };
            let err = lic_angle(&[], &p).unwrap_err();
            assert!(matches!(err, DecideError::InvalidParameter { name: "epsilon", .. }));
        }
    }

    // ── LIC 3 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic3_met() {
        let p = LicParameters { area1: 3.0, ..params() };
        assert!(lic_area(&pts(&[[0.0, 0.0], [2.0, 2.0], [4.0, 0.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic3_not_met() {
        let p = LicParameters { area1: 4.5, ..params() };
        assert!(!lic_area(&pts(&[[0.0, 0.0], [2.0, 2.0], [4.0, 0.0]]), &p).unwrap());
    }

    #[test]
    fn test_lic3_collinear_never_met() {
        let p = LicParameters { area1: 0.0, ..params() };
        assert!(!lic_area(&pts(&[[0.0, 0.0], [2.0, 2.0], [4.0, 4.0]]), &p).unwrap());
        assert!(!lic_area(&pts(&[[0.0, 0.0], [1.0, 1.0], [6.0, 6.0]]), &p).unwrap());
        let line = pts(&[[0.0, 0.0], [1.0, 3.0], [4.0, 12.0], [6.0, 18.0], [7.0, 21.0]]);
        assert!(!lic_area(&line, &p).unwrap());
    }

    #[test]
    fn test_lic3_negative_area_rejected() {
        let p = LicParameters { area1: -0.5, ..params() };
        let err = lic_area(&pts(&[[0.0, 0.0], [2.0, 2.0], [4.0, 0.0]]), &p).unwrap_err();
        assert!(matches!(err, DecideError::InvalidParameter { name: "area1", .. }));
    }

    // ── LIC 4 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic4_met() {
        let p = LicParameters { q_pts: 3, quads: 2, ..params() };
        let trajectory = pts(&[[1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0], [1.0, 1.0]]);
        assert!(lic_quadrants(&trajectory, &p).unwrap());
    }

    #[test]
    fn test_lic4_window_slides() {
        // Three quadrants appear overall but never within three points.
        let p = LicParameters { q_pts: 3, quads: 2, ..params() };
        let trajectory = pts(&[[1.0, 1.0], [-1.0, 1.0], [-1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0]]);
        assert!(!lic_quadrants(&trajectory, &p).unwrap());

        let p = LicParameters { q_pts: 2, quads: 1, ..params() };
        let trajectory = pts(&[[1.0, 1.0], [2.0, 2.0], [-1.0, 1.0]]);
        assert!(lic_quadrants(&trajectory, &p).unwrap());
    }

    #[test]
    fn test_lic4_two_point_window_cannot_exceed_three() {
        let p = LicParameters { q_pts: 2, quads: 3, ..params() };
        let trajectory = pts(&[[1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0], [1.0, -1.0], [1.0, 1.0]]);
        assert!(!lic_quadrants(&trajectory, &p).unwrap());
    }

    #[test]
    fn test_lic4_axis_points_resolve_low() {
        // (0,0), (-1,0), (0,-1) are I, II, III.
        let p = LicParameters { q_pts: 3, quads: 2, ..params() };
        let trajectory = pts(&[[0.0, 0.0], [-1.0, 0.0], [0.0, -1.0]]);
        assert!(lic_quadrants(&trajectory, &p).unwrap());
    }

    #[test]
    fn test_lic4_q_pts_domain() {
        let trajectory = pts(&[[1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0]]);
        for q_pts in [0, 1, 4] {
            let p = LicParameters { q_pts, ..params() };
            let err = lic_quadrants(&trajectory, &p).unwrap_err();
            assert!(matches!(err, DecideError::InvalidParameter { name: "q_pts", .. }));
        }
    }

    #[test]
    fn test_lic4_quads_domain() {
        let trajectory = pts(&[[1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0]]);
        for quads in [0, 4] {
            let p = LicParameters { quads, ..params() };
            let err = lic_quadrants(&trajectory, &p).unwrap_err();
            assert!(matches!(err, DecideError::InvalidParameter { name: "quads", .. }));
        }
    }

    #[test]
    fn test_lic4_empty_trajectory_rejected() {
        assert!(lic_quadrants(&[], &params()).is_err());
    }

    // ── LIC 5 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic5_met() {
        assert!(lic_x_reversal(&pts(&[[0.0, 0.0], [2.0, 0.0], [1.0, 5.0]]), &params()).unwrap());
    }

    #[test]
    fn test_lic5_equal_x_not_met() {
        let trajectory = pts(&[[0.0, 0.0], [0.0, 3.0], [1.0, 1.0]]);
        assert!(!lic_x_reversal(&trajectory, &params()).unwrap());
        assert!(!lic_x_reversal(&[], &params()).unwrap());
    }

    // ── LIC 6 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic6_met_off_chord() {
        let p = LicParameters { n_pts: 3, dist: 1.0, ..params() };
        let trajectory = pts(&[[0.0, 0.0], [1.0, 3.0], [4.0, 0.0]]);
        assert!(lic_chord_distance(&trajectory, &p).unwrap());
    }

    #[test]
    fn test_lic6_not_met_on_chord() {
        let p = LicParameters { n_pts: 4, dist: 0.5, ..params() };
        let trajectory = pts(&[[0.0, 0.0], [1.0, 0.1], [2.0, -0.1], [3.0, 0.0]]);
        assert!(!lic_chord_distance(&trajectory, &p).unwrap());
    }

    #[test]
    fn test_lic6_coincident_endpoints_use_point_distance() {
        let trajectory = pts(&[[1.0, 1.0], [4.0, 5.0], [1.0, 1.0]]);
        let p = LicParameters { n_pts: 3, dist: 4.9, ..params() };
        assert!(lic_chord_distance(&trajectory, &p).unwrap());
        let p = LicParameters { n_pts: 3, dist: 5.0, ..params() };
        assert!(!lic_chord_distance(&trajectory, &p).unwrap());
    }

    #[test]
    fn test_lic6_short_window_unmet_not_rejected() {
        // Windows of fewer than 3 points are accepted and never met.
        let trajectory = pts(&[[0.0, 0.0], [10.0, 10.0], [20.0, -5.0]]);
        for n_pts in [0, 1, 2] {
            let p = LicParameters { n_pts, dist: 0.0, ..params() };
            assert_eq!(lic_chord_distance(&trajectory, &p), Ok(false));
        }
    }

    #[test]
    fn test_lic6_window_longer_than_trajectory_rejected() {
        let p = LicParameters { n_pts: 4, ..params() };
        let err = lic_chord_distance(&pts(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]), &p)
            .unwrap_err();
        assert!(matches!(err, DecideError::InvalidParameter { name: "n_pts", .. }));
    }

    #[test]
    fn test_lic6_negative_dist_rejected() {
        let p = LicParameters { n_pts: 3, dist: -1.0, ..params() };
        let err = lic_chord_distance(&pts(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]), &p)
            .unwrap_err();
        assert!(matches!(err, DecideError::InvalidParameter { name: "dist", .. }));
    }

    // ── short trajectories ────────────────────────────────────────

    #[test]
    fn test_triple_conditions_false_below_three_points() {
        for trajectory in [pts(&[]), pts(&[[0.0, 0.0]]), pts(&[[0.0, 0.0], [9.0, 9.0]])] {
            let p = LicParameters {
                radius1: 0.0,
                epsilon: 0.0,
                area1: 0.0,
                n_pts: trajectory.len(),
                dist: 0.0,
                ..params()
            };
            assert!(!lic_radius(&trajectory, &p).unwrap());
            assert!(!lic_angle(&trajectory, &p).unwrap());
            assert!(!lic_area(&trajectory, &p).unwrap());
            assert!(!lic_chord_distance(&trajectory, &p).unwrap());
        }
    }
}
