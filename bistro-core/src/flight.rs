//! Fly-to-cart animation as plain data
//!
//! A flight is a transient entity with start/end points and a duration. The
//! view renders every live flight at [`Flight::position`] and removes it with
//! [`FlightDeck::land`] once its timer fires.

pub const FLIGHT_DURATION_MS: f64 = 650.0;
/// Peak upward bow of the path, in pixels.
const ARC_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: u64,
    pub image: String,
    pub from: Point,
    pub to: Point,
    pub started_ms: f64,
    pub duration_ms: f64,
}

impl Flight {
    /// Fraction of the flight completed at `now_ms`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Position along an eased, slightly arched path.
    #[must_use]
    pub fn position(&self, now_ms: f64) -> Point {
        let t = ease_out_cubic(self.progress(now_ms));
        let lift = ARC_HEIGHT * 4.0 * t * (1.0 - t);
        Point {
            x: self.from.x + (self.to.x - self.from.x) * t,
            y: self.from.y + (self.to.y - self.from.y) * t - lift,
        }
    }

    /// Scale shrinks from full size to a dot as the flight lands.
    #[must_use]
    pub fn scale(&self, now_ms: f64) -> f64 {
        1.0 - 0.8 * ease_out_cubic(self.progress(now_ms))
    }

    #[must_use]
    pub fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Live flights; ids are unique for the lifetime of the deck.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlightDeck {
    next_id: u64,
    flights: Vec<Flight>,
}

impl FlightDeck {
    /// Start a flight and return its id.
    pub fn launch(&mut self, image: impl Into<String>, from: Point, to: Point, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.flights.push(Flight {
            id,
            image: image.into(),
            from,
            to,
            started_ms: now_ms,
            duration_ms: FLIGHT_DURATION_MS,
        });
        id
    }

    /// Remove a finished flight. Returns whether it existed.
    pub fn land(&mut self, id: u64) -> bool {
        let before = self.flights.len();
        self.flights.retain(|flight| flight.id != id);
        self.flights.len() != before
    }

    /// Drop every flight finished by `now_ms`.
    pub fn sweep(&mut self, now_ms: f64) {
        self.flights.retain(|flight| !flight.is_done(now_ms));
    }

    #[must_use]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let mut deck = FlightDeck::default();
        deck.launch("/img/a.webp", Point::new(0.0, 0.0), Point::new(100.0, 100.0), 1_000.0);
        let flight = &deck.flights()[0];
        assert!(flight.progress(0.0).abs() < f64::EPSILON);
        assert!((flight.progress(10_000.0) - 1.0).abs() < f64::EPSILON);
        assert!(flight.is_done(1_000.0 + FLIGHT_DURATION_MS));
    }

    #[test]
    fn path_starts_and_ends_at_endpoints() {
        let mut deck = FlightDeck::default();
        deck.launch("/img/a.webp", Point::new(10.0, 500.0), Point::new(300.0, 20.0), 0.0);
        let flight = &deck.flights()[0];
        assert_eq!(flight.position(0.0), Point::new(10.0, 500.0));
        assert_eq!(flight.position(FLIGHT_DURATION_MS), Point::new(300.0, 20.0));
        assert!(flight.scale(FLIGHT_DURATION_MS) < flight.scale(0.0));
    }

    #[test]
    fn land_and_sweep_remove_flights() {
        let mut deck = FlightDeck::default();
        let first = deck.launch("a", Point::default(), Point::default(), 0.0);
        let second = deck.launch("b", Point::default(), Point::default(), 500.0);
        assert_ne!(first, second);
        assert!(deck.land(first));
        assert!(!deck.land(first));
        deck.sweep(500.0 + FLIGHT_DURATION_MS);
        assert!(deck.is_empty());
    }
}
