use crate::error::{FigureError, Result};
use std::f64::consts::PI;
use std::fmt;

/// Shape selector used when a figure is requested by kind rather than built directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Square,
    Circle,
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square => f.write_str("Square"),
            Self::Circle => f.write_str("Circle"),
        }
    }
}

/// A stored geometric figure.
///
/// Fields are private: every value comes out of [`Figure::circle`], [`Figure::square`] or
/// [`Figure::new`], so the property is strictly positive and not NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    kind: FigureKind,
    property: f64,
}

impl Figure {
    pub fn circle(radius: f64) -> Result<Self> {
        Self::new(FigureKind::Circle, radius)
    }

    pub fn square(side: f64) -> Result<Self> {
        Self::new(FigureKind::Square, side)
    }

    pub fn new(kind: FigureKind, property: f64) -> Result<Self> {
        validate_property(property)?;
        Ok(Self { kind, property })
    }

    #[must_use]
    pub const fn kind(&self) -> FigureKind {
        self.kind
    }

    /// Radius for circles, side length for squares.
    #[must_use]
    pub const fn property(&self) -> f64 {
        self.property
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        match self.kind {
            FigureKind::Circle => 2.0 * PI * self.property,
            FigureKind::Square => 4.0 * self.property,
        }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        match self.kind {
            FigureKind::Circle => PI * self.property * self.property,
            FigureKind::Square => self.property * self.property,
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.property())
    }
}

// Positive infinity passes on purpose: only `<= 0` and NaN are rejected.
fn validate_property(value: f64) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(FigureError::BadProperty(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn circle_formulas() {
        let circle = Figure::circle(1.0).expect("valid radius");
        assert_eq!(circle.kind(), FigureKind::Circle);
        assert_eq!(circle.perimeter(), 2.0 * PI);
        assert_eq!(circle.area(), PI);
    }

    #[test]
    fn square_formulas() {
        let square = Figure::square(2.0).expect("valid side");
        assert_eq!(square.kind(), FigureKind::Square);
        assert_eq!(square.perimeter(), 8.0);
        assert_eq!(square.area(), 4.0);
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        for value in [0.0, -0.0, -1.0, f64::NEG_INFINITY] {
            assert_eq!(Figure::circle(value), Err(FigureError::BadProperty(value)));
            assert_eq!(Figure::square(value), Err(FigureError::BadProperty(value)));
        }
        assert!(matches!(
            Figure::circle(f64::NAN),
            Err(FigureError::BadProperty(v)) if v.is_nan()
        ));
        assert!(matches!(
            Figure::square(f64::NAN),
            Err(FigureError::BadProperty(v)) if v.is_nan()
        ));
    }

    #[test]
    fn accepts_tiny_positive_values() {
        let square = Figure::square(f64::MIN_POSITIVE).expect("positive side");
        assert_eq!(square.property(), f64::MIN_POSITIVE);
    }

    #[test]
    fn new_dispatches_on_kind() {
        let square = Figure::new(FigureKind::Square, 3.0).expect("square");
        assert_eq!(square.kind(), FigureKind::Square);
        assert_eq!(square.property(), 3.0);
        assert_eq!(Figure::square(3.0), Ok(square));

        let circle = Figure::new(FigureKind::Circle, 3.0).expect("circle");
        assert_eq!(circle.kind(), FigureKind::Circle);
        assert_eq!(Figure::circle(3.0), Ok(circle));
    }

    #[test]
    fn new_rejects_what_the_shape_constructors_reject() {
        for kind in [FigureKind::Circle, FigureKind::Square] {
            assert_eq!(
                Figure::new(kind, -1.0),
                Err(FigureError::BadProperty(-1.0))
            );
            assert!(Figure::new(kind, f64::NAN).is_err());
        }
    }

    #[test]
    fn display_names_shape_and_property() {
        assert_eq!(Figure::square(2.5).unwrap().to_string(), "Square(2.5)");
        assert_eq!(Figure::circle(1.0).unwrap().to_string(), "Circle(1)");
    }

    #[test]
    fn bad_property_message_carries_value() {
        assert_eq!(
            FigureError::BadProperty(-1.0).to_string(),
            "bad property value: -1"
        );
    }
}
