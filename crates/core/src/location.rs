//! Device location collaborator.

use terminals_geo::Coordinate;

/// Source of the device's current position.
pub trait LocationProvider {
    /// Current fix, or `None` when location is unavailable or not permitted.
    fn current_location(&self) -> Option<Coordinate>;
}

/// A provider that always reports the same answer.
///
/// Useful for command-line use, where the "device" position is given as an
/// argument, and in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedLocation(Option<Coordinate>);

impl FixedLocation {
    /// A provider reporting `coordinate`.
    pub fn new(coordinate: Coordinate) -> Self {
        Self(Some(coordinate))
    }

    /// A provider with no fix, as when permission is denied.
    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> Option<Coordinate> {
        self.0
    }
}

impl<T: LocationProvider + ?Sized> LocationProvider for &T {
    fn current_location(&self) -> Option<Coordinate> {
        (**self).current_location()
    }
}
