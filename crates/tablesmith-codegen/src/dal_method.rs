use tablesmith_core::{Archetype, Column, TableNames};

/// A public method of the generated data-access class.
///
/// Pages call into the data-access class through these names, so they are
/// derived here once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DalMethod {
    LoadAll,
    LoadList,
    LoadAllPaged,
    LoadSingle,
    Save,
    DeleteSingle,
    DeleteList,
    DeleteAll,
    CountAll,
    CountSearch,

    /// Rows matching differentiator columns; holds their property names
    LoadBy(Vec<String>),
}

impl DalMethod {
    /// Every method that does not depend on caller-supplied criteria
    pub const FIXED: [DalMethod; 10] = [
        DalMethod::LoadAll,
        DalMethod::LoadList,
        DalMethod::LoadAllPaged,
        DalMethod::LoadSingle,
        DalMethod::Save,
        DalMethod::DeleteSingle,
        DalMethod::DeleteList,
        DalMethod::DeleteAll,
        DalMethod::CountAll,
        DalMethod::CountSearch,
    ];

    pub fn load_by(names: &TableNames, columns: &[&Column]) -> DalMethod {
        DalMethod::LoadBy(
            columns
                .iter()
                .map(|column| names.column(column).property)
                .collect(),
        )
    }

    pub fn name(&self) -> String {
        match self {
            DalMethod::LoadAll => "LoadAll".to_string(),
            DalMethod::LoadList => "LoadList".to_string(),
            DalMethod::LoadAllPaged => "LoadAllPaged".to_string(),
            DalMethod::LoadSingle => "LoadSingle".to_string(),
            DalMethod::Save => "Save".to_string(),
            DalMethod::DeleteSingle => "DeleteSingle".to_string(),
            DalMethod::DeleteList => "DeleteList".to_string(),
            DalMethod::DeleteAll => "DeleteAll".to_string(),
            DalMethod::CountAll => "CountAll".to_string(),
            DalMethod::CountSearch => "CountSearch".to_string(),
            DalMethod::LoadBy(properties) => format!("LoadBy{}", properties.join("And")),
        }
    }

    /// The procedure archetype the method calls
    pub fn archetype(&self) -> Archetype {
        match self {
            DalMethod::LoadAll => Archetype::SelectAll,
            DalMethod::LoadList => Archetype::SelectMany,
            DalMethod::LoadAllPaged => Archetype::Search,
            DalMethod::LoadSingle => Archetype::SelectSingle,
            DalMethod::Save => Archetype::Set,
            DalMethod::DeleteSingle => Archetype::DeleteSingle,
            DalMethod::DeleteList => Archetype::DeleteMany,
            DalMethod::DeleteAll => Archetype::DeleteAll,
            DalMethod::CountAll => Archetype::CountAll,
            DalMethod::CountSearch => Archetype::CountSearch,
            DalMethod::LoadBy(_) => Archetype::SelectManyBy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablesmith_core::{SqlType, Table};

    #[test]
    fn names() {
        let table = Table::builder("Game")
            .column(Column::new("Id", SqlType::Int).primary_key())
            .column(Column::new("first_name", SqlType::NVarChar))
            .column(Column::new("Disabled", SqlType::Bit))
            .build()
            .unwrap();
        let names = TableNames::new(&table);
        let columns = table.resolve(&["first_name", "Disabled"]).unwrap();

        let method = DalMethod::load_by(&names, &columns);
        assert_eq!(method.name(), "LoadByFirstNameAndDisabled");
        assert_eq!(method.archetype(), Archetype::SelectManyBy);

        assert_eq!(DalMethod::Save.archetype(), Archetype::Set);
        assert_eq!(DalMethod::LoadSingle.name(), "LoadSingle");
    }
}
