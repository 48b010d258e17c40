//! Text drawing of a grid
//!
//! Renders a grid as ASCII art, one tile per grid coordinate of the bounding
//! box. Borders are only drawn where a cell begins, so spanning cells show up
//! as a single box; holes are drawn as empty unit cells.
//!
//! ```text
//! +-----------+-----------------------+
//! |    red    |   pink                |
//! |           +-----------+-----------+
//! |           |   blue    |           |
//! +-----------+-----------+-----------+
//! ```

use std::fmt::Display;
use std::iter;

use crate::core::geometry::{Coord, Rect};
use crate::core::grid::Grid;

/// Drawing options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOptions {
    /// Characters of cell text shown per column
    pub cell_width: usize,
    /// Border junction
    pub corner: char,
    /// Horizontal border
    pub horizontal: char,
    /// Vertical border
    pub vertical: char,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            cell_width: 9,
            corner: '+',
            horizontal: '-',
            vertical: '|',
        }
    }
}

impl DrawOptions {
    /// Narrow columns, for wide tables
    pub fn compact() -> Self {
        Self {
            cell_width: 5,
            ..Default::default()
        }
    }
}

/// Draw a grid using the `Display` text of the cell contents
pub fn draw<T: Display>(grid: &Grid<T>, options: &DrawOptions) -> String {
    draw_with(grid, options, |content| content.to_string())
}

/// Draw a grid, extracting the text of each cell with `text`
pub fn draw_with<T, F>(grid: &Grid<T>, options: &DrawOptions, text: F) -> String
where
    F: Fn(&T) -> String,
{
    let bb = match grid.bounding_box() {
        Some(bb) => bb,
        None => return String::new(),
    };

    let mut lines = Vec::new();
    for y in bb.top_left().y()..=bb.bottom_right().y() {
        let tiles: Vec<Vec<String>> = (bb.top_left().x()..=bb.bottom_right().x())
            .map(|x| tile(grid, &bb, Coord::new(x, y), options, &text))
            .collect();
        let height = tiles.first().map_or(0, Vec::len);
        for index in 0..height {
            lines.push(tiles.iter().map(|t| t[index].as_str()).collect::<String>());
        }
    }
    lines.join("\n")
}

/// Lines of the tile at `coord`: top and middle, plus bottom on the last row
fn tile<T, F>(grid: &Grid<T>, bb: &Rect, coord: Coord, options: &DrawOptions, text: &F) -> Vec<String>
where
    F: Fn(&T) -> String,
{
    let (rect, label) = match grid.find(coord) {
        Some(cell) => (cell.rect(), text(&cell.content)),
        None => (Rect::at(coord), String::new()),
    };
    let (x, y) = (coord.x(), coord.y());
    let left = rect.top_left().x() == x;
    let top = rect.top_left().y() == y;
    let right = bb.bottom_right().x() == x;
    let bottom = bb.bottom_right().y() == y;
    let inner = options.cell_width + 2;

    let rule = |start: bool| {
        let mut line = String::new();
        line.push(if start { options.corner } else { options.horizontal });
        line.extend(iter::repeat(options.horizontal).take(inner));
        if right {
            line.push(options.corner);
        }
        line
    };

    let mut lines = Vec::with_capacity(3);
    if top {
        lines.push(rule(left));
    } else {
        lines.push(side_line(left, right, options, &" ".repeat(inner)));
    }

    let (min, max) = (rect.top_left(), rect.bottom_right());
    let centered =
        min.x() + (max.x() - min.x()) / 2 == x && min.y() + (max.y() - min.y()) / 2 == y;
    let body = if centered {
        let width = options.cell_width;
        let title: String = format!("{:^width$}", label, width = width)
            .chars()
            .take(width)
            .collect();
        format!(" {} ", title)
    } else {
        " ".repeat(inner)
    };
    lines.push(side_line(left, right, options, &body));

    if bottom {
        lines.push(rule(left));
    }
    lines
}

fn side_line(left: bool, right: bool, options: &DrawOptions, body: &str) -> String {
    let mut line = String::with_capacity(body.len() + 2);
    line.push(if left { options.vertical } else { ' ' });
    line.push_str(body);
    if right {
        line.push(options.vertical);
    }
    line
}
