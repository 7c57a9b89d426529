//! Screen identifiers and tab order.

use std::fmt;

use ombor_core::Collection;

/// Identifies each primary TUI screen, navigable by number keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Dashboard,
    Products,
    Employees,
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 3] = [Self::Dashboard, Self::Products, Self::Employees];

    /// Numeric key (1-3) for this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::Dashboard => 1,
            Self::Products => 2,
            Self::Employees => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Dashboard),
            2 => Some(Self::Products),
            3 => Some(Self::Employees),
            _ => None,
        }
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Products,
            Self::Products => Self::Employees,
            Self::Employees => Self::Dashboard,
        }
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        match self {
            Self::Dashboard => Self::Employees,
            Self::Products => Self::Dashboard,
            Self::Employees => Self::Products,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::Employees => "Employees",
        }
    }

    /// Record collection shown on this screen, if any.
    pub fn collection(self) -> Option<Collection> {
        match self {
            Self::Dashboard => None,
            Self::Products => Some(Collection::Products),
            Self::Employees => Some(Collection::Employees),
        }
    }

    pub fn for_collection(collection: Collection) -> Self {
        match collection {
            Collection::Products => Self::Products,
            Collection::Employees => Self::Employees,
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
