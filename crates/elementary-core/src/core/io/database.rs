use super::traits::ElementSource;
use crate::core::error::DataError;
use crate::core::models::element::{
    Block, CATEGORY_COUNT, Element, ListEntry, MAX_ATOMIC_NUMBER, Measurements, TableEntry,
    check_placement, check_weight,
};
use rusqlite::{Connection, OpenFlags, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Schema and rows of the bundled element table.
pub const BUNDLED_SQL: &str = include_str!("../../../data/elements.sql");

const FULL_COLUMNS: &str = "_id, num, sym, g, p, b, w, dens, melt, boil, heat, neg, ab, cat, ec, eps, uns, vid";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to open element database '{path}': {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },
    #[error("Element database query failed: {0}")]
    Query(#[from] rusqlite::Error),
    #[error("Element database holds corrupt data: {0}")]
    Data(#[from] DataError),
}

/// A read-only element store backed by a SQLite `elements` table.
pub struct ElementDatabase {
    conn: Connection,
}

impl ElementDatabase {
    /// Opens an existing database file without write access.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
            |e| SourceError::Open {
                path: path.to_string_lossy().to_string(),
                source: e,
            },
        )?;
        debug!("Opened element database at '{}'", path.display());
        Ok(Self { conn })
    }

    /// Loads the bundled dataset into a private in-memory database.
    pub fn open_bundled() -> Result<Self, SourceError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(BUNDLED_SQL)?;
        debug!("Loaded bundled element database");
        Ok(Self { conn })
    }

    /// Wraps an already open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl ElementSource for ElementDatabase {
    fn element(&self, id: i64) -> Result<Option<Element>, SourceError> {
        let raw = self
            .conn
            .query_row(
                &format!("SELECT {} FROM elements WHERE _id = ?1", FULL_COLUMNS),
                [id],
                RawElement::from_row,
            )
            .optional()?;
        debug!("Queried element {}: found={}", id, raw.is_some());

        raw.map(RawElement::decode).transpose().map_err(Into::into)
    }

    fn list_entries(&self) -> Result<Vec<ListEntry>, SourceError> {
        let mut stmt = self
            .conn
            .prepare("SELECT _id, num, sym, b, cat FROM elements ORDER BY num")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let entries = rows
            .into_iter()
            .map(|(id, num, symbol, block, cat)| {
                let number = decode_number(num)?;
                Ok(ListEntry {
                    id,
                    number,
                    symbol,
                    block: decode_block(number, block)?,
                    category: decode_category(number, cat)?,
                })
            })
            .collect::<Result<Vec<_>, DataError>>()?;
        debug!("Queried {} list entries", entries.len());
        Ok(entries)
    }

    fn table_entries(&self) -> Result<Vec<TableEntry>, SourceError> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT _id, num, sym, g, p, b, w, uns, cat, dens, melt, boil, heat, neg, ab
            FROM elements
            ORDER BY num
            "#,
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RawTableEntry {
                    id: row.get(0)?,
                    num: row.get(1)?,
                    sym: row.get(2)?,
                    g: row.get(3)?,
                    p: row.get(4)?,
                    b: row.get(5)?,
                    w: row.get(6)?,
                    uns: row.get(7)?,
                    cat: row.get(8)?,
                    measurements: Measurements {
                        density: row.get(9)?,
                        melt: row.get(10)?,
                        boil: row.get(11)?,
                        heat: row.get(12)?,
                        negativity: row.get(13)?,
                        abundance: row.get(14)?,
                    },
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let entries = rows
            .into_iter()
            .map(RawTableEntry::decode)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Queried {} table entries", entries.len());
        Ok(entries)
    }

    fn elements(&self) -> Result<Vec<Element>, SourceError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM elements ORDER BY num", FULL_COLUMNS))?;
        let rows = stmt
            .query_map([], RawElement::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let elements = rows
            .into_iter()
            .map(RawElement::decode)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Queried {} full element records", elements.len());
        Ok(elements)
    }
}

struct RawElement {
    id: i64,
    num: i64,
    sym: String,
    g: i64,
    p: i64,
    b: String,
    w: f64,
    measurements: Measurements,
    cat: i64,
    ec: String,
    eps: String,
    uns: i64,
    vid: Option<String>,
}

impl RawElement {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            num: row.get(1)?,
            sym: row.get(2)?,
            g: row.get(3)?,
            p: row.get(4)?,
            b: row.get(5)?,
            w: row.get(6)?,
            measurements: Measurements {
                density: row.get(7)?,
                melt: row.get(8)?,
                boil: row.get(9)?,
                heat: row.get(10)?,
                negativity: row.get(11)?,
                abundance: row.get(12)?,
            },
            cat: row.get(13)?,
            ec: row.get(14)?,
            eps: row.get(15)?,
            uns: row.get(16)?,
            vid: row.get(17)?,
        })
    }

    fn decode(self) -> Result<Element, DataError> {
        let number = decode_number(self.num)?;
        let configuration = self
            .ec
            .parse()
            .map_err(|source| DataError::InvalidConfiguration { number, source })?;

        let element = Element {
            id: self.id,
            number,
            symbol: self.sym,
            group: decode_group(number, self.g)?,
            period: decode_period(number, self.p)?,
            block: decode_block(number, self.b)?,
            weight: self.w,
            measurements: self.measurements,
            category: decode_category(number, self.cat)?,
            configuration,
            electrons: parse_shells(number, &self.eps)?,
            unstable: self.uns != 0,
            video: self.vid.filter(|v| !v.is_empty()),
        };
        element.validate(CATEGORY_COUNT)?;
        Ok(element)
    }
}

struct RawTableEntry {
    id: i64,
    num: i64,
    sym: String,
    g: i64,
    p: i64,
    b: String,
    w: f64,
    uns: i64,
    cat: i64,
    measurements: Measurements,
}

impl RawTableEntry {
    fn decode(self) -> Result<TableEntry, DataError> {
        let number = decode_number(self.num)?;
        let group = decode_group(number, self.g)?;
        let period = decode_period(number, self.p)?;
        check_placement(number, group, period)?;
        check_weight(number, self.w)?;

        Ok(TableEntry {
            id: self.id,
            number,
            symbol: self.sym,
            group,
            period,
            block: decode_block(number, self.b)?,
            weight: self.w,
            category: decode_category(number, self.cat)?,
            unstable: self.uns != 0,
            measurements: self.measurements,
        })
    }
}

fn decode_number(num: i64) -> Result<u32, DataError> {
    u32::try_from(num)
        .ok()
        .filter(|n| (1..=MAX_ATOMIC_NUMBER).contains(n))
        .ok_or(DataError::NumberOutOfRange { number: num })
}

fn decode_group(number: u32, group: i64) -> Result<u32, DataError> {
    u32::try_from(group).map_err(|_| DataError::GroupOutOfRange { number, group })
}

fn decode_period(number: u32, period: i64) -> Result<u32, DataError> {
    u32::try_from(period).map_err(|_| DataError::PeriodOutOfRange { number, period })
}

fn decode_block(number: u32, block: String) -> Result<Block, DataError> {
    Block::from_letter(&block).ok_or(DataError::InvalidBlock {
        number,
        value: block,
    })
}

fn decode_category(number: u32, category: i64) -> Result<usize, DataError> {
    usize::try_from(category)
        .ok()
        .filter(|c| *c < CATEGORY_COUNT)
        .ok_or(DataError::CategoryOutOfRange {
            number,
            category,
            count: CATEGORY_COUNT,
        })
}

/// Parses a comma-separated electrons-per-shell list such as `"2,8,6"`.
fn parse_shells(number: u32, value: &str) -> Result<Vec<u32>, DataError> {
    value
        .split(',')
        .map(|s| s.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| DataError::InvalidShells {
            number,
            value: value.to_string(),
        })
}
