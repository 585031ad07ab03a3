use crate::calendar::MonthCursor;

/// One cell of the month grid. Padding cells carry no day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub index: usize,
    pub day: Option<u32>,
}

impl GridCell {
    pub fn is_blank(&self) -> bool {
        self.day.is_none()
    }
}

/// Cells of one month: leading blanks so day 1 sits under its weekday
/// column, then one cell per day.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    offset: usize,
    len: usize,
    next: usize,
}

/// Builds the grid for `cursor`. Calling again with the same cursor yields
/// the same cells.
pub fn build_grid(cursor: MonthCursor) -> MonthGrid {
    let offset = cursor.first_weekday_offset() as usize;
    MonthGrid {
        offset,
        len: offset + cursor.days_in_month() as usize,
        next: 0,
    }
}

impl MonthGrid {
    /// Remaining cells in rows of seven, the final row padded with blanks.
    pub fn weeks(self) -> Vec<[GridCell; 7]> {
        let cells: Vec<GridCell> = self.collect();
        cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [GridCell {
                    index: 0,
                    day: None,
                }; 7];
                for (column, slot) in week.iter_mut().enumerate() {
                    *slot = chunk.get(column).copied().unwrap_or(GridCell {
                        index: chunk[0].index + column,
                        day: None,
                    });
                }
                week
            })
            .collect()
    }
}

impl Iterator for MonthGrid {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        let day = (index >= self.offset).then(|| (index - self.offset + 1) as u32);
        Some(GridCell { index, day })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthGrid {}
