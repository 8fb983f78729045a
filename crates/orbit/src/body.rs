//! Orbital periods of the planets (and Pluto).

/// A body orbiting the Sun with a fixed sidereal period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    name: &'static str,
    period_days: f64,
}

impl Body {
    /// Creates a body with the given orbital period in Earth days.
    pub const fn new(name: &'static str, period_days: f64) -> Self {
        Self { name, period_days }
    }

    /// Name used as the milestone label.
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Orbital period in Earth days; may be fractional.
    pub fn period_days(self) -> f64 {
        self.period_days
    }
}

/// Mercury through Pluto, ordered by ascending orbital period.
pub const BODIES: [Body; 8] = [
    Body::new("Mercury", 87.97),
    Body::new("Venus", 224.7),
    Body::new("Mars", 686.98),
    Body::new("Jupiter", 4332.71),
    Body::new("Saturn", 10758.5),
    Body::new("Uranus", 30685.0),
    Body::new("Neptune", 60190.0),
    Body::new("Pluto", 90800.0),
];

/// Looks up a body in [`BODIES`] by name, ignoring ASCII case.
pub fn find_body(name: &str) -> Option<Body> {
    BODIES
        .iter()
        .copied()
        .find(|b| b.name.eq_ignore_ascii_case(name))
}
