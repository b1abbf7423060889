//! # Figures Store
//!
//! In-memory collection of geometric figures with aggregate queries.
//!
//! ## Model
//!
//! ```text
//! FigureStore
//!     │
//!     ├──> add_circle / add_square (validated append)
//!     │      └─ property must be > 0 and not NaN
//!     │
//!     └──> total_perimeter / total_area
//!            └─ sum over figures in insertion order (empty store = 0)
//! ```
//!
//! The store only grows. Figures are immutable once stored.

mod error;
mod figure;
mod store;

pub use error::{FigureError, Result};
pub use figure::{Figure, FigureKind};
pub use store::FigureStore;
