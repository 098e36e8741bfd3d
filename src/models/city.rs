//! City type.

use serde::{Deserialize, Serialize};

/// A city in a Euclidean TSP instance.
///
/// Cities are immutable once created and owned by the solver's city list.
/// Tours reference cities by their index in that list, so the `id` of a
/// city equals its position and is assigned sequentially by the solver.
///
/// # Examples
///
/// ```
/// use tsp_evolve::models::City;
///
/// let city = City::new(0, 3.0, 4.0);
/// assert_eq!(city.id(), 0);
/// assert!(city.name().is_none());
///
/// let named = City::new(1, 0.0, 0.0).with_name("Depot");
/// assert_eq!(named.name(), Some("Depot"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
    name: Option<String>,
}

impl City {
    /// Creates a new city at the given coordinates.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            name: None,
        }
    }

    /// Sets a display name for this city.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// City ID (equal to its index in the solver's city list).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Optional display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
