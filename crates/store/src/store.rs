use crate::error::Result;
use crate::figure::{Figure, FigureKind};

/// Append-only collection of figures, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FigureStore {
    figures: Vec<Figure>,
}

impl FigureStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_circle(&mut self, radius: f64) -> Result<()> {
        self.push(Figure::circle(radius))
    }

    pub fn add_square(&mut self, side: f64) -> Result<()> {
        self.push(Figure::square(side))
    }

    pub fn add(&mut self, kind: FigureKind, property: f64) -> Result<()> {
        self.push(Figure::new(kind, property))
    }

    /// Sum of all perimeters; `0.0` for an empty store.
    #[must_use]
    pub fn total_perimeter(&self) -> f64 {
        self.figures
            .iter()
            .fold(0.0, |total, figure| total + figure.perimeter())
    }

    /// Sum of all areas; `0.0` for an empty store.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.figures
            .iter()
            .fold(0.0, |total, figure| total + figure.area())
    }

    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    fn push(&mut self, figure: Result<Figure>) -> Result<()> {
        match figure {
            Ok(figure) => {
                log::debug!("stored {figure} (#{})", self.figures.len() + 1);
                self.figures.push(figure);
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected figure: {err}");
                Err(err)
            }
        }
    }
}
