use crate::helpers::dome::{DOME_RADIUS, dome_point};
use crate::shooting_star::components::ShootingStar;
use bevy::math::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Most recent positions kept per trail.
pub const TRAIL_CAPACITY: usize = 30;

/// Flight time bounds in seconds; doubles as the star's maximum life.
pub const FLIGHT_SECS_MIN: f32 = 2.0;
pub const FLIGHT_SECS_MAX: f32 = 4.0;

// Polar-angle bands on the dome: flights start near the zenith and aim at
// a band reaching further down toward the horizon.
const START_PHI: (f32, f32) = (0.05 * PI, 0.2 * PI);
const END_PHI: (f32, f32) = (0.05 * PI, 0.4 * PI);

pub struct FlightPlan {
    pub start: Vec3,
    pub velocity: Vec3,
    pub duration: f32,
}

/// Pick a start point near the zenith, an end point lower on the dome, and
/// a flight time; velocity is whatever covers that arc chord in that time.
pub fn plan_flight(rng: &mut impl Rng) -> FlightPlan {
    let start = dome_point(
        DOME_RADIUS,
        rng.random_range(0.0..TAU),
        rng.random_range(START_PHI.0..=START_PHI.1),
    );
    let end = dome_point(
        DOME_RADIUS,
        rng.random_range(0.0..TAU),
        rng.random_range(END_PHI.0..=END_PHI.1),
    );
    let duration = rng.random_range(FLIGHT_SECS_MIN..=FLIGHT_SECS_MAX);

    FlightPlan {
        start,
        velocity: (end - start) / duration,
        duration,
    }
}

/// Advance one star by `delta` seconds: integrate its position, age it,
/// and record the new position in its trail. Returns true once the star's
/// life is spent and it should be retired.
pub fn step_star(position: &mut Vec3, star: &mut ShootingStar, trail: &mut Trail, delta: f32) -> bool {
    *position += star.velocity * delta;
    star.life += delta;
    trail.record(*position);
    star.life >= star.max_life
}

/// Sliding window of the newest `TRAIL_CAPACITY` positions, newest first.
/// Backed by a fixed array with an explicit head index; `record` overwrites
/// the oldest slot once full.
pub struct Trail {
    points: [Vec3; TRAIL_CAPACITY],
    head: usize,
    len: usize,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            points: [Vec3::ZERO; TRAIL_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    pub fn record(&mut self, position: Vec3) {
        self.head = (self.head + TRAIL_CAPACITY - 1) % TRAIL_CAPACITY;
        self.points[self.head] = position;
        self.len = (self.len + 1).min(TRAIL_CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position at `offset` back from the newest point (offset 0 = newest).
    pub fn point(&self, offset: usize) -> Vec3 {
        debug_assert!(offset < self.len);
        self.points[(self.head + offset) % TRAIL_CAPACITY]
    }

    /// Fade of the point at `offset`: 0 for the newest, approaching (never
    /// reaching) 1 for the oldest retained point. Depends on the current
    /// length, so values shift as the window fills.
    pub fn fade_index(&self, offset: usize) -> f32 {
        debug_assert!(offset < self.len);
        offset as f32 / self.len as f32
    }

    /// Positions newest first.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.len).map(|offset| self.point(offset))
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[test]
    fn test_flight_plans_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let flight = plan_flight(&mut rng);

            assert!(flight.duration >= FLIGHT_SECS_MIN && flight.duration <= FLIGHT_SECS_MAX);
            assert!((flight.start.length() - DOME_RADIUS).abs() < 1e-3);

            // Start band is near the zenith: phi in [0.05pi, 0.2pi]
            let min_y = DOME_RADIUS * (0.2 * PI).cos();
            let max_y = DOME_RADIUS * (0.05 * PI).cos();
            assert!(
                flight.start.y >= min_y - 1e-3 && flight.start.y <= max_y + 1e-3,
                "start height was {}",
                flight.start.y
            );

            // Flying for the full duration lands back on the dome
            let end = flight.start + flight.velocity * flight.duration;
            assert!((end.length() - DOME_RADIUS).abs() < 1e-2);
        }
    }

    #[rstest]
    #[case(0.25)]
    #[case(1.0)]
    #[case(1.75)]
    fn test_motion_is_exactly_linear(#[case] t: f32) {
        let start = Vec3::new(1.0, 40.0, -3.0);
        let velocity = Vec3::new(10.0, -12.0, 4.0);
        let mut star = ShootingStar { velocity, life: 0.0, max_life: 2.0 };
        let mut trail = Trail::new();
        let mut position = start;

        // Integrate in uneven chunks; the sum of deltas is t
        let steps = 8;
        for _ in 0..steps {
            step_star(&mut position, &mut star, &mut trail, t / steps as f32);
        }

        let expected = start + velocity * t;
        assert!((position - expected).length() < 1e-3, "position was {position}");
        assert!((star.life - t).abs() < 1e-5);
    }

    #[test]
    fn test_half_flight_then_retirement() {
        // start (0,50,0), end (50,0,0), duration 2s
        let start = Vec3::new(0.0, 50.0, 0.0);
        let end = Vec3::new(50.0, 0.0, 0.0);
        let mut star = ShootingStar {
            velocity: (end - start) / 2.0,
            life: 0.0,
            max_life: 2.0,
        };
        let mut trail = Trail::new();
        let mut position = start;

        let retired = step_star(&mut position, &mut star, &mut trail, 1.0);
        assert!(!retired);
        assert!((position - Vec3::new(25.0, 25.0, 0.0)).length() < 1e-4);

        let retired = step_star(&mut position, &mut star, &mut trail, 1.0);
        assert!(retired);
        assert!((position - end).length() < 1e-4);
    }

    #[test]
    fn test_retires_when_life_overshoots() {
        let mut star = ShootingStar {
            velocity: Vec3::X,
            life: 0.0,
            max_life: 2.0,
        };
        let mut trail = Trail::new();
        let mut position = Vec3::ZERO;

        assert!(!step_star(&mut position, &mut star, &mut trail, 1.9));
        assert!(step_star(&mut position, &mut star, &mut trail, 0.5));
    }

    #[test]
    fn test_trail_window_stabilizes_at_capacity() {
        let mut star = ShootingStar {
            velocity: Vec3::new(1.0, 0.0, 0.0),
            life: 0.0,
            max_life: 10.0,
        };
        let mut trail = Trail::new();
        let mut position = Vec3::ZERO;

        for tick in 1..=31 {
            step_star(&mut position, &mut star, &mut trail, 0.016);
            if tick < TRAIL_CAPACITY {
                assert_eq!(trail.len(), tick);
            } else {
                assert_eq!(trail.len(), TRAIL_CAPACITY);
            }
        }
    }

    #[test]
    fn test_trail_is_newest_first() {
        let mut trail = Trail::new();
        for i in 0..40 {
            trail.record(Vec3::new(i as f32, 0.0, 0.0));
        }

        assert_eq!(trail.len(), TRAIL_CAPACITY);
        assert_eq!(trail.point(0), Vec3::new(39.0, 0.0, 0.0));
        // Oldest retained point is 30 records back
        assert_eq!(trail.point(TRAIL_CAPACITY - 1), Vec3::new(10.0, 0.0, 0.0));
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(30)]
    #[case(45)] // past capacity
    fn test_fade_index_endpoints(#[case] records: usize) {
        let mut trail = Trail::new();
        for i in 0..records {
            trail.record(Vec3::splat(i as f32));
        }

        assert_eq!(trail.fade_index(0), 0.0);
        let oldest = trail.fade_index(trail.len() - 1);
        assert!(oldest < 1.0);
        assert!((oldest - (trail.len() - 1) as f32 / trail.len() as f32).abs() < 1e-6);
    }

    #[test]
    fn test_fade_indices_rescale_with_length() {
        let mut trail = Trail::new();
        trail.record(Vec3::ZERO);
        trail.record(Vec3::ZERO);
        assert!((trail.fade_index(1) - 0.5).abs() < 1e-6);

        trail.record(Vec3::ZERO);
        trail.record(Vec3::ZERO);
        // Same slot-from-newest, new denominator
        assert!((trail.fade_index(1) - 0.25).abs() < 1e-6);
    }
}
