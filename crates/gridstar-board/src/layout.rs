//! ASCII layouts.
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | free cell |
//! | `#` | obstacle |
//! | `S` | start marker |
//! | `E` | end marker |
//! | `*` | path cell (output only) |

use std::fmt;
use std::str::FromStr;

use gridstar_core::{CellId, Point};

use crate::board::Board;
use crate::error::LayoutError;

const FREE: char = '.';
const OBSTACLE: char = '#';
const START: char = 'S';
const END: char = 'E';
const PATH: char = '*';

impl Board {
    /// Parse a board from rows of layout characters.
    ///
    /// Blank lines before and after the rows are ignored, as is trailing
    /// whitespace on each row.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let rows = match rows.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &rows[..=last],
            None => return Err(LayoutError::Empty),
        };

        let width = rows[0].chars().count();
        for (i, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line: i + 1,
                    expected: width,
                    found,
                });
            }
        }

        let mut board = Board::new(width as i32, rows.len() as i32);
        let mut start = None;
        let mut end = None;
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let idx = y * width + x;
                match ch {
                    FREE => {}
                    OBSTACLE => board.set_blocked(idx, true),
                    START | END => {
                        let slot = if ch == START { &mut start } else { &mut end };
                        if slot.is_some() {
                            return Err(LayoutError::DuplicateMarker { marker: ch, pos });
                        }
                        *slot = Some(CellId::new(idx));
                    }
                    _ => return Err(LayoutError::InvalidChar { ch, pos }),
                }
            }
        }
        board.set_markers(start, end);
        Ok(board)
    }

    /// Draw the board as a layout, marking `path` cells with `*`.
    ///
    /// Markers and obstacles take precedence over path cells. Every row ends
    /// with a newline.
    pub fn render(&self, path: &[CellId]) -> String {
        let w = self.width().max(0) as usize;
        let mut on_path = vec![false; self.range().len()];
        for &c in path {
            if let Some(slot) = on_path.get_mut(c.index()) {
                *slot = true;
            }
        }

        let mut out = String::with_capacity((w + 1) * self.height().max(0) as usize);
        for p in self.range() {
            let i = (p.y as usize) * w + p.x as usize;
            let cell = CellId::new(i);
            let ch = if self.start() == Some(cell) {
                START
            } else if self.end() == Some(cell) {
                END
            } else if self.is_blocked(p) {
                OBSTACLE
            } else if on_path[i] {
                PATH
            } else {
                FREE
            };
            out.push(ch);
            if p.x + 1 == self.width() {
                out.push('\n');
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_layout(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}
