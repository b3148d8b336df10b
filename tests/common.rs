#![allow(dead_code)]

use dlx_cover::ExactCover;
use std::collections::HashMap;

/// Initialise logging once per test binary, controlled by `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A value placed in a box of a square board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    /// Ranges from 0 to `side_length - 1`.
    pub row: usize,
    /// Ranges from 0 to `side_length - 1`.
    pub column: usize,
    /// Ranges from 1 to `side_length`.
    pub value: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    RowColumn { row: usize, column: usize },
    RowNumber { row: usize, value: usize },
    ColumnNumber { column: usize, value: usize },
    SquareNumber { square: usize, value: usize },
}

/// A Latin square, or a Sudoku when `box_side_length` is set.
///
/// Given values stay in the grid as the only possibility for their box, so a
/// solution lists every box of the board.
#[derive(Debug)]
pub struct Board {
    pub side_length: usize,
    pub box_side_length: Option<usize>,
    pub possibilities: Vec<Placement>,
    pub constraints: Vec<Constraint>,
}

impl Board {
    pub fn latin_square(side_length: usize, givens: &[Placement]) -> Self {
        Self::new(side_length, None, givens)
    }

    pub fn sudoku(box_side_length: usize, givens: &[Placement]) -> Self {
        Self::new(
            box_side_length * box_side_length,
            Some(box_side_length),
            givens,
        )
    }

    fn new(side_length: usize, box_side_length: Option<usize>, givens: &[Placement]) -> Self {
        let givens: HashMap<_, _> = givens
            .iter()
            .map(|given| ((given.row, given.column), given.value))
            .collect();

        let possibilities = (0..side_length)
            .flat_map(|row| (0..side_length).map(move |column| (row, column)))
            .flat_map(|(row, column)| {
                let values = match givens.get(&(row, column)) {
                    Some(value) => *value..=*value,
                    None => 1..=side_length,
                };

                values.map(move |value| Placement { row, column, value })
            })
            .collect();

        let mut constraints = Vec::new();
        for first in 0..side_length {
            for second in 0..side_length {
                let value = second + 1;
                constraints.push(Constraint::RowColumn {
                    row: first,
                    column: second,
                });
                constraints.push(Constraint::RowNumber { row: first, value });
                constraints.push(Constraint::ColumnNumber {
                    column: first,
                    value,
                });
                if box_side_length.is_some() {
                    constraints.push(Constraint::SquareNumber {
                        square: first,
                        value,
                    });
                }
            }
        }

        Board {
            side_length,
            box_side_length,
            possibilities,
            constraints,
        }
    }

    fn square(&self, placement: &Placement) -> Option<usize> {
        self.box_side_length.map(|box_side| {
            (placement.row / box_side) * box_side + placement.column / box_side
        })
    }
}

impl ExactCover for Board {
    type Constraint = Constraint;
    type Possibility = Placement;

    fn satisfies(&self, poss: &Self::Possibility, cons: &Self::Constraint) -> bool {
        use Constraint::*;

        match *cons {
            RowColumn { row, column } => poss.row == row && poss.column == column,
            RowNumber { row, value } => poss.row == row && poss.value == value,
            ColumnNumber { column, value } => poss.column == column && poss.value == value,
            SquareNumber { square, value } => {
                self.square(poss) == Some(square) && poss.value == value
            }
        }
    }

    fn possibilities(&self) -> &[Self::Possibility] {
        &self.possibilities
    }

    fn constraints(&self) -> &[Self::Constraint] {
        &self.constraints
    }
}

/// Boards up to 9 wide use the digits `1-9`, larger boards the letters `A-Z`.
/// Empty boxes are `0`, `.` or `-`.
pub fn symbol_value(symbol: char, side_length: usize) -> Option<usize> {
    let value = if side_length <= 9 {
        symbol.to_digit(10).map(|digit| digit as usize)
    } else if symbol.is_ascii_uppercase() {
        Some((symbol as u8 - b'A') as usize + 1)
    } else {
        None
    };

    value.filter(|value| (1..=side_length).contains(value))
}

pub fn value_symbol(value: usize, side_length: usize) -> char {
    if side_length <= 9 {
        char::from_digit(value as u32, 10).unwrap()
    } else {
        (b'A' + (value - 1) as u8) as char
    }
}

/// Parse a board written in row-major order.
///
/// # Panics
///  - If the string is not exactly `side_length` * `side_length` characters
pub fn parse_board(input: &str, box_side_length: usize) -> Vec<Placement> {
    let side_length = box_side_length * box_side_length;

    log::debug!(
        "Parsing board [{}] for side length [{}].",
        input,
        side_length
    );

    assert_eq!(
        input.chars().count(),
        side_length * side_length,
        "Input needs to be `side_length` * `side_length` characters long."
    );

    input
        .chars()
        .enumerate()
        .filter_map(|(index, symbol)| {
            symbol_value(symbol, side_length).map(|value| Placement {
                row: index / side_length,
                column: index % side_length,
                value,
            })
        })
        .collect()
}

/// Format placements in the format read by `parse_board`.
///
/// # Panics
///  - If two placements share a box.
pub fn format_board<'a>(
    placements: impl IntoIterator<Item = &'a Placement>,
    side_length: usize,
) -> String {
    let mut output = vec!['0'; side_length * side_length];

    for placement in placements {
        let index = placement.row * side_length + placement.column;
        assert_eq!(
            output[index], '0',
            "Overwriting an existing value at position [{},{}]",
            placement.row, placement.column
        );
        output[index] = value_symbol(placement.value, side_length);
    }

    output.into_iter().collect()
}

/// Check that a fully filled board has no repeats in any row, column or box.
pub fn assert_valid_board(board: &str, box_side_length: usize) {
    let side_length = box_side_length * box_side_length;
    let values: Vec<_> = board
        .chars()
        .map(|symbol| symbol_value(symbol, side_length).expect("board is not filled"))
        .collect();
    assert_eq!(values.len(), side_length * side_length);

    let mut seen = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let (row, column) = (index / side_length, index % side_length);
        let square = (row / box_side_length) * box_side_length + column / box_side_length;

        for group in [(0, row), (1, column), (2, square)] {
            assert!(
                seen.insert((group, value), index).is_none(),
                "value [{}] repeats at position [{},{}]",
                value,
                row,
                column
            );
        }
    }
}

/// Check that `rows` (1-based) cover every column of `matrix` exactly once.
pub fn assert_exact_cover(matrix: &[Vec<bool>], rows: &[usize]) {
    let num_columns = matrix[0].len();

    for column in 0..num_columns {
        let covered = rows.iter().filter(|row| matrix[*row - 1][column]).count();
        assert_eq!(
            covered, 1,
            "column [{}] covered [{}] times by rows {:?}",
            column + 1,
            covered,
            rows
        );
    }
}
