//! Registry of active per-column boundaries.

use std::{collections::HashMap, sync::Arc};

use arrow::array::BooleanArray;

use super::{Boundary, ScalarValue};

/// Column holding the team name (e.g. `Team1`).
pub const TEAM_COLUMN: &str = "team";
/// Column holding the side (`T` or `CT`).
pub const SIDE_COLUMN: &str = "side";
/// Column holding the map area a player stands in (e.g. `BombsiteB`).
pub const SITE_COLUMN: &str = "area_name";

/// Mapping from column name to its active [`Boundary`].
///
/// Registering a boundary for a column replaces any earlier one. Iteration
/// order carries no meaning because boundaries are AND-combined.
#[derive(Clone, Debug, Default)]
pub struct Boundaries {
    entries: HashMap<Arc<str>, Boundary>,
}

impl Boundaries {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs or replaces an arbitrary boundary.
    pub fn insert<N>(&mut self, column: N, boundary: Boundary) -> &mut Self
    where
        N: Into<Arc<str>>,
    {
        self.entries.insert(column.into(), boundary);
        self
    }

    /// Installs an inclusive range. Either side may be open.
    ///
    /// An inverted range (`lower > upper`) is accepted and matches no rows.
    pub fn set_range<N, L, U>(&mut self, column: N, lower: Option<L>, upper: Option<U>) -> &mut Self
    where
        N: Into<Arc<str>>,
        L: Into<ScalarValue>,
        U: Into<ScalarValue>,
    {
        self.insert(column, Boundary::range(lower, upper))
    }

    /// Installs a membership boundary over the supplied values.
    pub fn set_membership<N, I, V>(&mut self, column: N, values: I) -> &mut Self
    where
        N: Into<Arc<str>>,
        I: IntoIterator<Item = V>,
        V: Into<ScalarValue>,
    {
        self.insert(column, Boundary::set(values))
    }

    /// Installs a single fixed value, treated as a one-element set.
    pub fn set_value<N, V>(&mut self, column: N, value: V) -> &mut Self
    where
        N: Into<Arc<str>>,
        V: Into<ScalarValue>,
    {
        self.set_membership(column, [value])
    }

    /// Installs a precomputed row mask under a (possibly synthetic) column name.
    ///
    /// The mask length is checked against the table at evaluation time.
    pub fn set_boolean_selector<N>(&mut self, column: N, mask: BooleanArray) -> &mut Self
    where
        N: Into<Arc<str>>,
    {
        self.insert(column, Boundary::Selector(mask))
    }

    /// Restricts the `team` column to the given team names.
    pub fn team<I, V>(&mut self, teams: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ScalarValue>,
    {
        self.set_membership(TEAM_COLUMN, teams)
    }

    /// Restricts the `side` column to the given sides.
    pub fn side<I, V>(&mut self, sides: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ScalarValue>,
    {
        self.set_membership(SIDE_COLUMN, sides)
    }

    /// Restricts the `area_name` column to the given bombsites or areas.
    pub fn site<I, V>(&mut self, sites: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ScalarValue>,
    {
        self.set_membership(SITE_COLUMN, sites)
    }

    /// Drops the boundary for one column, returning it if present.
    pub fn remove(&mut self, column: &str) -> Option<Boundary> {
        self.entries.remove(column)
    }

    /// Removes every boundary.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Looks up the boundary registered for `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Boundary> {
        self.entries.get(column)
    }

    /// Number of registered boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no boundary is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(column, boundary)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Boundary)> + '_ {
        self.entries
            .iter()
            .map(|(name, boundary)| (name.as_ref(), boundary))
    }
}
