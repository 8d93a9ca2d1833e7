use crate::core::error::DataError;
use crate::core::io::database::{ElementDatabase, SourceError};
use crate::core::io::isotopes::{IsotopeLoadError, IsotopeTable};
use crate::core::io::strings::{Strings, StringsLoadError};
use crate::core::io::traits::ElementSource;
use crate::core::models::element::{Element, MAX_ATOMIC_NUMBER, TableEntry};
use crate::settings::SettingsStore;
use crate::view::details::ElementDetails;
use crate::view::grid::GridPosition;
use crate::view::list::{ListItem, SortOrder, filter_and_sort};
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Element source error: {0}")]
    Source(#[from] SourceError),
    #[error("Isotope table error: {0}")]
    Isotopes(#[from] IsotopeLoadError),
    #[error("String table error: {0}")]
    Strings(#[from] StringsLoadError),
    #[error("Data integrity violation: {0}")]
    Data(#[from] DataError),
}

/// Where each resource is loaded from. `None` selects the bundled copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub database_path: Option<PathBuf>,
    pub strings_path: Option<PathBuf>,
    pub isotopes_path: Option<PathBuf>,
}

#[derive(Default)]
pub struct CatalogConfigBuilder {
    database_path: Option<PathBuf>,
    strings_path: Option<PathBuf>,
    isotopes_path: Option<PathBuf>,
}

impl CatalogConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database_path(mut self, path: Option<PathBuf>) -> Self {
        self.database_path = path;
        self
    }

    pub fn strings_path(mut self, path: Option<PathBuf>) -> Self {
        self.strings_path = path;
        self
    }

    pub fn isotopes_path(mut self, path: Option<PathBuf>) -> Self {
        self.isotopes_path = path;
        self
    }

    pub fn build(self) -> CatalogConfig {
        CatalogConfig {
            database_path: self.database_path,
            strings_path: self.strings_path,
            isotopes_path: self.isotopes_path,
        }
    }
}

/// One occupied cell of the periodic table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub position: GridPosition,
    pub entry: TableEntry,
}

/// The outcome of a successful dataset check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    pub elements: usize,
    pub elements_with_isotopes: usize,
}

/// The element reference data: records, localized strings and isotopes.
pub struct Catalog<S: ElementSource = ElementDatabase> {
    source: S,
    strings: Strings,
    isotopes: IsotopeTable,
}

impl Catalog<ElementDatabase> {
    /// Opens every resource named by `config`, falling back to the bundled copies.
    ///
    /// Every record is loaded and checked once here, so a corrupt dataset fails to open
    /// instead of failing on whichever record is fetched first.
    #[instrument(skip_all, name = "catalog_open")]
    pub fn open(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let source = match &config.database_path {
            Some(path) => ElementDatabase::open(path)?,
            None => ElementDatabase::open_bundled()?,
        };
        let strings = match &config.strings_path {
            Some(path) => Strings::load(path)?,
            None => Strings::bundled()?,
        };
        let isotopes = match &config.isotopes_path {
            Some(path) => IsotopeTable::load(path)?,
            None => IsotopeTable::bundled()?,
        };
        let catalog = Self::with_source(source, strings, isotopes);
        catalog.verify()?;
        info!(
            "Catalog ready (database: {}, strings: {}, isotopes: {}).",
            describe(&config.database_path),
            describe(&config.strings_path),
            describe(&config.isotopes_path)
        );
        Ok(catalog)
    }

    /// The catalog over the bundled dataset.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::open(&CatalogConfig::default())
    }
}

impl<S: ElementSource> Catalog<S> {
    pub fn with_source(source: S, strings: Strings, isotopes: IsotopeTable) -> Self {
        Self {
            source,
            strings,
            isotopes,
        }
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    pub fn isotopes(&self) -> &IsotopeTable {
        &self.isotopes
    }

    /// Fetches one element by row identifier. `Ok(None)` when it does not exist.
    pub fn element(&self, id: i64) -> Result<Option<Element>, CatalogError> {
        Ok(self.source.element(id)?)
    }

    pub fn find_by_number(&self, number: u32) -> Result<Option<Element>, CatalogError> {
        let id = self
            .source
            .list_entries()?
            .into_iter()
            .find(|entry| entry.number == number)
            .map(|entry| entry.id);
        match id {
            Some(id) => self.element(id),
            None => Ok(None),
        }
    }

    /// Finds an element whose symbol or localized name equals `text`, ignoring case.
    pub fn find_by_text(&self, text: &str) -> Result<Option<Element>, CatalogError> {
        let wanted = text.trim();
        let id = self
            .list_items()?
            .into_iter()
            .find(|item| {
                item.entry.symbol.eq_ignore_ascii_case(wanted)
                    || item.name.to_lowercase() == wanted.to_lowercase()
            })
            .map(|item| item.entry.id);
        debug!("Resolved '{}' to element id {:?}", wanted, id);
        match id {
            Some(id) => self.element(id),
            None => Ok(None),
        }
    }

    pub fn details<'a>(
        &'a self,
        element: &'a Element,
        settings: &'a SettingsStore,
    ) -> ElementDetails<'a> {
        ElementDetails::new(element, &self.strings, &self.isotopes, settings)
    }

    /// Every element as a list row with its localized name, in atomic number order.
    pub fn list_items(&self) -> Result<Vec<ListItem>, CatalogError> {
        Ok(self
            .source
            .list_entries()?
            .into_iter()
            .map(|entry| ListItem::new(entry, &self.strings))
            .collect())
    }

    /// The filtered and ordered element list.
    pub fn list(&self, filter: &str, order: SortOrder) -> Result<Vec<ListItem>, CatalogError> {
        let items = self.list_items()?;
        let result = filter_and_sort(&items, filter, order);
        debug!(
            "Filter '{}' sorted by {} {} kept {} of {} elements",
            filter,
            order.field,
            order.direction,
            result.len(),
            items.len()
        );
        Ok(result)
    }

    /// Places every element on the grid. Any misplaced record fails the whole layout.
    #[instrument(skip_all, name = "periodic_table")]
    pub fn periodic_table(&self) -> Result<Vec<TableCell>, CatalogError> {
        let cells = self
            .source
            .table_entries()?
            .into_iter()
            .map(|entry| {
                Ok(TableCell {
                    position: GridPosition::of(&entry)?,
                    entry,
                })
            })
            .collect::<Result<Vec<_>, DataError>>()?;
        debug!("Laid out {} table cells", cells.len());
        Ok(cells)
    }

    /// Loads every full record and checks that each atomic number in `1..=118` appears
    /// exactly once and that no two elements share a symbol, ignoring case.
    #[instrument(skip_all, name = "catalog_verify")]
    pub fn verify(&self) -> Result<VerifyReport, CatalogError> {
        let elements = self.source.elements()?;

        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for element in &elements {
            *counts.entry(element.number).or_default() += 1;
        }
        if let Some((&number, _)) = counts.iter().find(|(_, count)| **count > 1) {
            warn!("Atomic number {} is duplicated", number);
            return Err(DataError::DuplicateNumber { number }.into());
        }
        if let Some(number) = (1..=MAX_ATOMIC_NUMBER).find(|n| !counts.contains_key(n)) {
            warn!("Atomic number {} is missing", number);
            return Err(DataError::MissingNumber { number }.into());
        }

        let mut symbols = HashSet::new();
        if let Some(element) = elements
            .iter()
            .find(|element| !symbols.insert(element.symbol.to_lowercase()))
        {
            warn!("Symbol {} is duplicated", element.symbol);
            return Err(DataError::DuplicateSymbol {
                symbol: element.symbol.clone(),
            }
            .into());
        }

        let report = VerifyReport {
            elements: elements.len(),
            elements_with_isotopes: self.isotopes.element_count(),
        };
        info!(
            "Verified {} elements ({} with isotope data).",
            report.elements, report.elements_with_isotopes
        );
        Ok(report)
    }
}

fn describe(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("'{}'", p.display()),
        None => "bundled".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::tests::sulfur;
    use crate::core::units::TemperatureUnit;
    use crate::view::list::{SortDirection, SortField};
    use crate::view::subtext::SubtextField;
    use rusqlite::Connection;
    use std::fs;
    use tempfile::tempdir;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    fn symbols(items: &[ListItem]) -> Vec<&str> {
        items.iter().map(|i| i.entry.symbol.as_str()).collect()
    }

    #[test]
    fn filter_h_matches_symbols_and_names() {
        let items = catalog().list("h", SortOrder::default()).unwrap();
        assert_eq!(symbols(&items), vec!["H", "He", "Ho", "Hf", "Hg", "Hs"]);
    }

    #[test]
    fn name_sort_descending_reverses_ascending() {
        let catalog = catalog();
        for filter in ["", "c", "n", "zz"] {
            let mut asc = catalog
                .list(filter, SortOrder::new(SortField::Name, SortDirection::Ascending))
                .unwrap();
            let desc = catalog
                .list(filter, SortOrder::new(SortField::Name, SortDirection::Descending))
                .unwrap();
            asc.reverse();
            assert_eq!(asc, desc);
        }
        let first = catalog
            .list("", SortOrder::new(SortField::Name, SortDirection::Ascending))
            .unwrap();
        assert_eq!(first[0].name, "Actinium");
    }

    #[test]
    fn finds_elements_by_number_symbol_and_name() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_number(16).unwrap().unwrap().symbol, "S");
        assert_eq!(catalog.find_by_text("fe").unwrap().unwrap().number, 26);
        assert_eq!(catalog.find_by_text("MERCURY").unwrap().unwrap().symbol, "Hg");
        assert!(catalog.find_by_number(119).unwrap().is_none());
        assert!(catalog.find_by_text("Unobtainium").unwrap().is_none());
        assert!(catalog.element(1000).unwrap().is_none());
    }

    #[test]
    fn details_for_bundled_records() {
        let catalog = catalog();
        let settings = SettingsStore::default();

        let sulfur = catalog.find_by_text("S").unwrap().unwrap();
        let details = catalog.details(&sulfur, &settings);
        assert_eq!(details.configuration(), "[Ne] 3s² 3p⁴");
        assert_eq!(details.electrons(), "2, 8, 6");

        let technetium = catalog.find_by_text("Tc").unwrap().unwrap();
        let details = catalog.details(&technetium, &settings);
        assert_eq!(details.weight(), "[98]");

        let krypton = catalog.find_by_text("Kr").unwrap().unwrap();
        let details = catalog.details(&krypton, &settings);
        assert_eq!(details.abundance(), "<0.001 mg/kg");

        let hydrogen = catalog.find_by_number(1).unwrap().unwrap();
        settings.set_temperature_unit(TemperatureUnit::Celsius);
        let details = catalog.details(&hydrogen, &settings);
        assert_eq!(details.melt(), "-259.14 °C");
    }

    #[test]
    fn periodic_table_places_every_element_once() {
        let cells = catalog().periodic_table().unwrap();
        assert_eq!(cells.len(), 118);

        let mut positions: Vec<GridPosition> = cells.iter().map(|c| c.position).collect();
        positions.sort();
        positions.dedup();
        assert_eq!(positions.len(), 118);

        let lanthanum = cells.iter().find(|c| c.entry.number == 57).unwrap();
        assert_eq!(lanthanum.position, GridPosition { row: 9, column: 3 });
        let lawrencium = cells.iter().find(|c| c.entry.number == 103).unwrap();
        assert_eq!(lawrencium.position, GridPosition { row: 10, column: 17 });
    }

    #[test]
    fn every_cell_follows_layout_and_weight_rules() {
        for cell in catalog().periodic_table().unwrap() {
            let entry = &cell.entry;
            let expected = match (entry.group, entry.period) {
                (0, 6) => GridPosition { row: 9, column: entry.number - 54 },
                (0, 7) => GridPosition { row: 10, column: entry.number - 86 },
                (group, period) => GridPosition { row: period, column: group },
            };
            assert_eq!(cell.position, expected, "element {}", entry.number);

            if entry.unstable {
                assert_eq!(
                    SubtextField::Weight.format(entry, TemperatureUnit::Kelvin),
                    format!("[{}]", entry.weight.round() as i64),
                    "element {}",
                    entry.number
                );
            }
        }
    }

    #[test]
    fn verify_accepts_bundled_dataset() {
        let report = catalog().verify().unwrap();
        assert_eq!(report.elements, 118);
        assert!(report.elements_with_isotopes > 0);
    }

    #[test]
    fn verify_reports_missing_and_duplicate_numbers() {
        let strings = Strings::bundled().unwrap();
        let isotopes = IsotopeTable::default();

        let catalog = Catalog::with_source(vec![sulfur()], strings.clone(), isotopes.clone());
        assert!(matches!(
            catalog.verify(),
            Err(CatalogError::Data(DataError::MissingNumber { number: 1 }))
        ));

        let catalog = Catalog::with_source(vec![sulfur(), sulfur()], strings, isotopes);
        assert!(matches!(
            catalog.verify(),
            Err(CatalogError::Data(DataError::DuplicateNumber { number: 16 }))
        ));
    }

    #[test]
    fn verify_reports_duplicate_symbols_ignoring_case() {
        let mut elements = ElementDatabase::open_bundled().unwrap().elements().unwrap();
        elements[1].symbol = "h".to_string();
        let catalog = Catalog::with_source(
            elements,
            Strings::bundled().unwrap(),
            IsotopeTable::default(),
        );
        assert!(matches!(
            catalog.verify(),
            Err(CatalogError::Data(DataError::DuplicateSymbol { symbol })) if symbol == "h"
        ));
    }

    fn database_file(dir: &std::path::Path, patch: &str) -> PathBuf {
        let db_path = dir.join("elements.db");
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(crate::core::io::database::BUNDLED_SQL)
            .unwrap();
        conn.execute_batch(patch).unwrap();
        db_path
    }

    #[test]
    fn open_honours_file_overrides() {
        let dir = tempdir().unwrap();
        let db_path = database_file(dir.path(), "");
        let strings_path = dir.path().join("strings.toml");
        fs::write(
            &strings_path,
            crate::core::io::strings::BUNDLED_TOML.replace("\"Helium\"", "\"Helio\""),
        )
        .unwrap();

        let config = CatalogConfigBuilder::new()
            .database_path(Some(db_path))
            .strings_path(Some(strings_path))
            .build();
        let catalog = Catalog::open(&config).unwrap();
        let items = catalog.list("", SortOrder::default()).unwrap();
        assert_eq!(items.len(), 118);
        assert_eq!(items[1].name, "Helio");
    }

    #[test]
    fn open_rejects_incomplete_database() {
        let dir = tempdir().unwrap();
        let db_path = database_file(dir.path(), "DELETE FROM elements WHERE num > 2;");
        let config = CatalogConfigBuilder::new().database_path(Some(db_path)).build();
        assert!(matches!(
            Catalog::open(&config),
            Err(CatalogError::Data(DataError::MissingNumber { number: 3 }))
        ));
    }

    #[test]
    fn open_rejects_one_corrupt_row() {
        let dir = tempdir().unwrap();
        let db_path = database_file(
            dir.path(),
            "UPDATE elements SET ec = '[Kr] 5s2', w = -1.0 WHERE num = 50;",
        );
        let config = CatalogConfigBuilder::new().database_path(Some(db_path)).build();
        assert!(matches!(
            Catalog::open(&config),
            Err(CatalogError::Source(SourceError::Data(
                DataError::InvalidWeight { number: 50, .. }
            )))
        ));
    }

    #[test]
    fn open_rejects_duplicate_symbols() {
        let dir = tempdir().unwrap();
        let db_path = database_file(
            dir.path(),
            "CREATE TABLE loose AS SELECT * FROM elements;
             DROP TABLE elements;
             ALTER TABLE loose RENAME TO elements;
             UPDATE elements SET sym = 'H' WHERE num = 2;",
        );
        let config = CatalogConfigBuilder::new().database_path(Some(db_path)).build();
        assert!(matches!(
            Catalog::open(&config),
            Err(CatalogError::Data(DataError::DuplicateSymbol { .. }))
        ));
    }

    #[test]
    fn open_surfaces_resource_errors() {
        let dir = tempdir().unwrap();
        let config = CatalogConfigBuilder::new()
            .isotopes_path(Some(dir.path().join("absent.csv")))
            .build();
        assert!(matches!(
            Catalog::open(&config),
            Err(CatalogError::Isotopes(_))
        ));
    }
}
