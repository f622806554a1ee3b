//! Mathematical utilities: least squares, polynomial fits, grids, splines.

pub mod grid;
pub mod ols;
pub mod polyfit;
pub mod spline;

pub use grid::*;
pub use ols::*;
pub use polyfit::*;
pub use spline::CubicSpline;
