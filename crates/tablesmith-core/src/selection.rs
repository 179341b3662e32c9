/// Field lists chosen by the caller for one table.
///
/// Generators never infer sort, search or differentiator columns from the
/// schema; archetypes that need them read them from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// `ORDER BY` columns for list, criteria and search procedures
    pub sort: Vec<String>,

    /// Columns matched against the search string
    pub search: Vec<String>,

    /// Differentiator column lists; each yields one select-by procedure
    pub criteria: Vec<Vec<String>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.sort = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn search<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.search = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Adds one differentiator column list
    pub fn criteria<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.criteria
            .push(columns.into_iter().map(Into::into).collect());
        self
    }
}
