//! Textual grid mazes, the environment the planner binaries work with.

use crate::parsed_types::Cell;
use crate::parsers::{parse_maze_rows, parse_row, Span, SyntaxError};
use crate::search::{Action, Cost, Environment, Position, Transition, Transitions};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::debug;

/// The cost of entering each kind of passable cell.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CellCosts {
    #[serde(default = "default_floor_cost")]
    pub floor: f64,
    #[serde(default = "default_mud_cost")]
    pub mud: f64,
}

fn default_floor_cost() -> f64 {
    1.
}

fn default_mud_cost() -> f64 {
    3.
}

impl Default for CellCosts {
    fn default() -> Self {
        Self {
            floor: default_floor_cost(),
            mud: default_mud_cost(),
        }
    }
}

impl CellCosts {
    pub fn of(&self, cell: Cell) -> Option<f64> {
        match cell {
            Cell::Wall => None,
            Cell::Floor => Some(self.floor),
            Cell::Mud => Some(self.mud),
        }
    }
}

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("failed to read maze file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid maze: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("maze has no rows")]
    Empty,
    #[error("row {row} has {found} cells but the first row has {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// A rectangular grid of cells. Moves are 4-connected and cost whatever it
/// costs to enter the destination cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    width: usize,
    height: usize,
    /// Row-major.
    cells: Vec<Cell>,
    costs: CellCosts,
}

impl Maze {
    pub fn from_path(path: &Path) -> Result<Self, MazeError> {
        Self::from_path_with_costs(path, CellCosts::default())
    }

    pub fn from_path_with_costs(path: &Path, costs: CellCosts) -> Result<Self, MazeError> {
        let text = std::fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text_with_costs(&text, costs)
    }

    pub fn from_text(text: &str) -> Result<Self, MazeError> {
        Self::from_text_with_costs(text, CellCosts::default())
    }

    pub fn from_text_with_costs(text: &str, costs: CellCosts) -> Result<Self, MazeError> {
        let input = Span::new(text);
        let (remainder, rows) = parse_maze_rows(input)
            .map_err(|failure| SyntaxError::from_failure(failure, input))?;
        if !remainder.fragment().is_empty() {
            return Err(match parse_row(remainder) {
                Err(failure) => SyntaxError::from_failure(failure, remainder),
                Ok(_) => SyntaxError::at(remainder),
            }
            .into());
        }
        Self::from_rows(rows, costs)
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>, costs: CellCosts) -> Result<Self, MazeError> {
        let width = rows
            .first()
            .map(Vec::len)
            .filter(|&width| width > 0)
            .ok_or(MazeError::Empty)?;
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::RaggedRow {
                    row: row_index,
                    found: row.len(),
                    expected: width,
                });
            }
            cells.extend(row);
        }
        debug!(width, height, "parsed maze");
        Ok(Self {
            width,
            height,
            cells,
            costs,
        })
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn costs(&self) -> &CellCosts {
        &self.costs
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.contains(position)
            .then(|| self.cells[position.y * self.width + position.x])
    }

    pub fn is_passable(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|cell| cell.is_passable())
    }

    /// The cost of entering `position`, `None` if it cannot be entered.
    pub fn cost(&self, position: Position) -> Option<Cost> {
        self.cell(position)
            .and_then(|cell| self.costs.of(cell))
            .map(Cost::from)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// All passable positions in row-major order.
    pub fn passable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
            .filter(|&position| self.is_passable(position))
    }
}

impl Environment for Maze {
    fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    fn transitions(&self, position: Position) -> Transitions {
        let mut transitions = Transitions::new();
        for action in Action::iter() {
            if let Some(to) = position.step(action) {
                if let Some(cost) = self.cost(to) {
                    transitions.push(Transition::new(action, cost, to));
                }
            }
        }
        transitions
    }

    fn min_step_cost(&self) -> Cost {
        Cost::from(self.costs.floor.min(self.costs.mud))
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::Found;
    use crate::test_utils::*;
    use std::io::Write;

    #[test]
    fn parses_corridors() {
        let maze = Maze::from_text(CORRIDORS_MAZE_TEXT).unwrap();
        assert_eq!(maze.width(), 7);
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.count(Cell::Mud), 2);
        assert_eq!(maze.cell(Position::new(2, 2)), Some(Cell::Mud));
        assert_eq!(maze.cell(Position::new(2, 3)), Some(Cell::Wall));
        assert_eq!(maze.cell(Position::new(7, 0)), None);
    }

    #[test]
    fn display_reproduces_the_grid() {
        let maze = Maze::from_text(SEALED_MAZE_TEXT).unwrap();
        assert_eq!(maze.to_string(), SEALED_MAZE_TEXT);
    }

    #[test]
    fn transitions_skip_walls_and_charge_entry_cost() {
        let maze = Maze::from_text(CORRIDORS_MAZE_TEXT).unwrap();
        let transitions = maze.transitions(Position::new(1, 2));
        let summary: Vec<(Action, f64)> = transitions
            .iter()
            .map(|t| (t.action, t.cost.into_inner()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Action::Up, 1.),
                (Action::Down, 1.),
                (Action::Right, 3.)
            ]
        );
    }

    #[test]
    fn transitions_stop_at_the_grid_edge() {
        let maze = Maze::from_text("..\n..\n").unwrap();
        let transitions = maze.transitions(Position::new(0, 0));
        let targets: Vec<Position> = transitions.iter().map(|t| t.to).collect();
        assert_eq!(targets, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn custom_costs() {
        let costs = CellCosts {
            floor: 2.,
            mud: 5.,
        };
        let maze = Maze::from_text_with_costs(CORRIDORS_MAZE_TEXT, costs).unwrap();
        assert_eq!(maze.cost(Position::new(1, 1)), Some(Cost::from(2.)));
        assert_eq!(maze.cost(Position::new(2, 2)), Some(Cost::from(5.)));
        assert_eq!(maze.cost(Position::new(0, 0)), None);
        assert_eq!(maze.min_step_cost(), Cost::from(2.));
    }

    #[test]
    fn rejects_ragged_rows() {
        let error = Maze::from_text("XXX\nX.\nXXX\n").unwrap_err();
        assert!(matches!(
            error,
            MazeError::RaggedRow {
                row: 1,
                found: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn rejects_empty_maze() {
        assert!(matches!(
            Maze::from_text("; only a comment\n\n"),
            Err(MazeError::Empty)
        ));
    }

    #[test]
    fn rejects_zero_width_rows() {
        assert!(matches!(
            Maze::from_rows(vec![vec![]], CellCosts::default()),
            Err(MazeError::Empty)
        ));
    }

    fn syntax_error(text: &str) -> SyntaxError {
        match Maze::from_text(text).unwrap_err() {
            MazeError::Syntax(syntax) => syntax,
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn reports_unknown_cell_location() {
        let syntax = syntax_error("XXXX\nX.#X\nXXXX\n");
        assert_eq!((syntax.line, syntax.column), (2, 3));
        assert_eq!(syntax.found, Found::Char('#'));
    }

    #[test]
    fn reports_embedded_space_location() {
        let syntax = syntax_error("XXX\nX . X\nXXX\n");
        assert_eq!((syntax.line, syntax.column), (2, 2));
        assert_eq!(syntax.found, Found::Char(' '));
    }

    #[test]
    fn reports_space_after_valid_cells() {
        let syntax = syntax_error("XXXX\nX.X M\nXXXX\n");
        assert_eq!((syntax.line, syntax.column), (2, 4));
        assert_eq!(syntax.found, Found::Char(' '));
    }

    #[test]
    fn passable_positions_are_row_major() {
        let maze = Maze::from_text("X.\n.X\n").unwrap();
        let positions: Vec<Position> = maze.passable_positions().collect();
        assert_eq!(positions, vec![Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MUDFLATS_MAZE_TEXT.as_bytes()).unwrap();
        let maze = Maze::from_path(file.path()).unwrap();
        assert_eq!(maze.count(Cell::Mud), 4);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = Maze::from_path(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(error, MazeError::Io { .. }));
        assert!(error.to_string().contains("/definitely/not/here.txt"));
    }
}
