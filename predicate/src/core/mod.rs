//! Core boundary structures shared by the registry and the evaluator.

mod boundary;
mod registry;
mod value;

pub use boundary::{Boundary, BoundaryKind};
pub use registry::{Boundaries, SIDE_COLUMN, SITE_COLUMN, TEAM_COLUMN};
pub use value::{ScalarValue, ScalarValueRef};
