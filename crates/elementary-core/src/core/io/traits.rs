use super::database::SourceError;
use crate::core::models::element::{Element, ListEntry, TableEntry};

/// Defines the read-only queries a store of element records must answer.
///
/// Every call decodes fresh values; implementors never hand out shared mutable records.
/// Bulk queries return records ordered by atomic number.
pub trait ElementSource {
    /// Fetches the full record with the given row identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - The row identifier of the element.
    ///
    /// # Return
    ///
    /// Returns `Ok(None)` when no record has this identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried or the record violates the
    /// dataset's integrity rules.
    fn element(&self, id: i64) -> Result<Option<Element>, SourceError>;

    /// Fetches the list-view projection of every element.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried or a row is corrupt.
    fn list_entries(&self) -> Result<Vec<ListEntry>, SourceError>;

    /// Fetches the grid-view projection of every element.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried or a row is corrupt.
    fn table_entries(&self) -> Result<Vec<TableEntry>, SourceError>;

    /// Fetches every full record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried or a record is corrupt.
    fn elements(&self) -> Result<Vec<Element>, SourceError>;
}

/// An in-memory source over already decoded records.
impl ElementSource for Vec<Element> {
    fn element(&self, id: i64) -> Result<Option<Element>, SourceError> {
        Ok(self.iter().find(|e| e.id == id).cloned())
    }

    fn list_entries(&self) -> Result<Vec<ListEntry>, SourceError> {
        Ok(sorted(self).into_iter().map(ListEntry::from).collect())
    }

    fn table_entries(&self) -> Result<Vec<TableEntry>, SourceError> {
        Ok(sorted(self).into_iter().map(TableEntry::from).collect())
    }

    fn elements(&self) -> Result<Vec<Element>, SourceError> {
        Ok(sorted(self).into_iter().cloned().collect())
    }
}

fn sorted(elements: &[Element]) -> Vec<&Element> {
    let mut refs: Vec<&Element> = elements.iter().collect();
    refs.sort_by_key(|e| e.number);
    refs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::tests::sulfur;

    #[test]
    fn vec_source_orders_by_number_and_misses_cleanly() {
        let mut hydrogen = sulfur();
        hydrogen.id = 1;
        hydrogen.number = 1;
        hydrogen.symbol = "H".to_string();
        let source = vec![sulfur(), hydrogen];

        let symbols: Vec<String> = source
            .list_entries()
            .unwrap()
            .into_iter()
            .map(|e| e.symbol)
            .collect();
        assert_eq!(symbols, vec!["H", "S"]);
        assert_eq!(source.table_entries().unwrap()[1].number, 16);
        assert_eq!(source.element(16).unwrap().map(|e| e.symbol), Some("S".into()));
        assert_eq!(source.element(99).unwrap(), None);
    }
}
