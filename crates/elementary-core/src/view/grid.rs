use crate::core::error::DataError;
use crate::core::models::element::{TableEntry, check_placement};

/// A one-based cell on the periodic table grid.
///
/// Rows 1 to 7 are the periods. The lanthanide and actinide series are pulled out of the
/// main body into footer rows 9 and 10; row 8 stays empty as a spacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    pub row: u32,
    pub column: u32,
}

impl GridPosition {
    pub const ROWS: u32 = 10;
    pub const COLUMNS: u32 = 18;

    /// Places an element on the grid.
    ///
    /// Group 0 outside the two f-series ranges is corrupt data and yields an error.
    pub fn locate(number: u32, group: u32, period: u32) -> Result<Self, DataError> {
        check_placement(number, group, period)?;
        let position = match (group, period) {
            (0, 6) => Self {
                row: 9,
                column: number - 54,
            },
            (0, _) => Self {
                row: 10,
                column: number - 86,
            },
            (group, period) => Self {
                row: period,
                column: group,
            },
        };
        Ok(position)
    }

    pub fn of(entry: &TableEntry) -> Result<Self, DataError> {
        Self::locate(entry.number, entry.group, entry.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u32, column: u32) -> GridPosition {
        GridPosition { row, column }
    }

    #[test]
    fn main_body_uses_period_and_group() {
        assert_eq!(GridPosition::locate(1, 1, 1), Ok(at(1, 1)));
        assert_eq!(GridPosition::locate(2, 18, 1), Ok(at(1, 18)));
        assert_eq!(GridPosition::locate(16, 16, 3), Ok(at(3, 16)));
        assert_eq!(GridPosition::locate(118, 18, 7), Ok(at(7, 18)));
    }

    #[test]
    fn series_rows_move_to_the_footer() {
        assert_eq!(GridPosition::locate(57, 0, 6), Ok(at(9, 3)));
        assert_eq!(GridPosition::locate(71, 0, 6), Ok(at(9, 17)));
        assert_eq!(GridPosition::locate(89, 0, 7), Ok(at(10, 3)));
        assert_eq!(GridPosition::locate(103, 0, 7), Ok(at(10, 17)));
    }

    #[test]
    fn orphan_group_zero_is_a_data_error() {
        assert_eq!(
            GridPosition::locate(72, 0, 6),
            Err(DataError::OrphanSeriesElement {
                number: 72,
                period: 6
            })
        );
        assert!(GridPosition::locate(10, 0, 2).is_err());
    }

    #[test]
    fn every_position_fits_the_grid() {
        for number in 57..=71 {
            let pos = GridPosition::locate(number, 0, 6).unwrap();
            assert!(pos.column >= 1 && pos.column <= GridPosition::COLUMNS);
            assert!(pos.row <= GridPosition::ROWS);
        }
    }
}
