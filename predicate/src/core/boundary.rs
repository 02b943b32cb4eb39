use std::fmt;

use arrow::array::BooleanArray;

use super::ScalarValue;

/// Constraint attached to a single column.
///
/// The kind is chosen by the caller when the boundary is registered and is
/// never inferred from the column's data.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Boundary {
    /// Inclusive range; a missing bound leaves that side open.
    Range {
        /// Lower bound (`>=`), if any.
        lower: Option<ScalarValue>,
        /// Upper bound (`<=`), if any.
        upper: Option<ScalarValue>,
    },
    /// Exact membership in a list of allowed values.
    Set(Vec<ScalarValue>),
    /// Precomputed per-row mask, aligned with the table's rows.
    Selector(BooleanArray),
}

impl Boundary {
    /// Builds a range boundary.
    #[must_use]
    pub fn range<L, U>(lower: Option<L>, upper: Option<U>) -> Self
    where
        L: Into<ScalarValue>,
        U: Into<ScalarValue>,
    {
        Boundary::Range {
            lower: lower.map(Into::into),
            upper: upper.map(Into::into),
        }
    }

    /// Builds a membership boundary from any collection of literals.
    #[must_use]
    pub fn set<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ScalarValue>,
    {
        Boundary::Set(values.into_iter().map(Into::into).collect())
    }

    /// Returns the tag of this boundary.
    #[must_use]
    pub fn kind(&self) -> BoundaryKind {
        match self {
            Boundary::Range { .. } => BoundaryKind::Range,
            Boundary::Set(_) => BoundaryKind::Set,
            Boundary::Selector(_) => BoundaryKind::Selector,
        }
    }

    /// Number of rows a selector covers, `None` for value-based boundaries.
    #[must_use]
    pub fn selector_len(&self) -> Option<usize> {
        match self {
            Boundary::Selector(mask) => Some(mask.len()),
            _ => None,
        }
    }
}

/// Tag identifying how a [`Boundary`] is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// [`Boundary::Range`].
    Range,
    /// [`Boundary::Set`].
    Set,
    /// [`Boundary::Selector`].
    Selector,
}

impl BoundaryKind {
    /// Returns a textual representation of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryKind::Range => "range",
            BoundaryKind::Set => "set",
            BoundaryKind::Selector => "selector",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
