//! Building blocks for the list views' search and select filters.

/// Value of a select-box filter: either the `"all"` sentinel or one choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterChoice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> FilterChoice<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            FilterChoice::All => true,
            FilterChoice::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterChoice::All)
    }
}

impl<T> FilterChoice<T> {
    /// Parse a select value. `"all"` (or an unknown value) means no filtering.
    pub fn parse(raw: &str, parse: impl Fn(&str) -> Option<T>) -> Self {
        if raw == "all" {
            return FilterChoice::All;
        }
        parse(raw).map(FilterChoice::Only).unwrap_or(FilterChoice::All)
    }

    /// Value to put back into the select box.
    pub fn key(&self, as_str: impl Fn(&T) -> &'static str) -> &'static str {
        match self {
            FilterChoice::All => "all",
            FilterChoice::Only(v) => as_str(v),
        }
    }
}

/// Case-insensitive substring search across several fields.
///
/// A blank term matches every record.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}
