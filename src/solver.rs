use crate::{
    grid::{Direction, Grid},
    Error,
};

/// Exact cover solver over a 0/1 matrix.
///
/// Rows of the matrix are candidate choices and columns are constraints that
/// must each be satisfied by exactly one chosen row. Rows are identified by
/// their 1-based index in the input matrix.
///
/// The search runs on an explicit stack instead of recursion, so its depth is
/// only bounded by memory. A single instance is meant to answer a single
/// query: after a cover is found the grid stays in its searched state until
/// [`Solver::reset`] is called. Searching to exhaustion leaves the grid exactly
/// as it was built.
#[derive(Debug, Clone)]
pub struct Solver {
    grid: Grid,
    partial_solution: Vec<usize>,
    stack: Vec<Frame>,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    // Nothing searched yet
    Ready,
    // Stopped on a cover, `partial_solution` holds it
    Solved,
    // Every branch was tried
    Exhausted,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    column: usize,
    // Node of the row selected from `column`, or `column` itself before the
    // first row is selected
    row: usize,
}

impl Solver {
    /// Create a solver for the given dense matrix.
    ///
    /// Every row must have the same length, which is taken as the number of
    /// columns.
    pub fn new<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self, Error> {
        let num_columns = matrix.first().map_or(0, |row| row.as_ref().len());
        let num_filled: usize = matrix
            .iter()
            .map(|row| row.as_ref().iter().filter(|filled| **filled).count())
            .sum();

        Self::with_capacity(matrix, num_columns.saturating_add(1).saturating_add(num_filled))
    }

    /// Create a solver for the given dense matrix, reserving room for
    /// `max_nodes` nodes up front.
    ///
    /// A grid needs one node per column, one for the root and one per `true`
    /// entry. A smaller `max_nodes` only costs reallocations, a larger one is
    /// clamped to what the grid needs.
    pub fn with_capacity<R: AsRef<[bool]>>(matrix: &[R], max_nodes: usize) -> Result<Self, Error> {
        let num_columns = matrix.first().ok_or(Error::NoRows)?.as_ref().len();
        if num_columns == 0 {
            return Err(Error::NoColumns);
        }

        if let Some((index, row)) = matrix
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != num_columns)
        {
            return Err(Error::RaggedRow {
                row: index + 1,
                expected: num_columns,
                found: row.as_ref().len(),
            });
        }

        let num_filled = matrix
            .iter()
            .map(|row| row.as_ref().iter().filter(|filled| **filled).count())
            .sum();
        let needed = required_nodes(num_columns, num_filled)?;

        let mut grid = Grid::with_capacity(num_columns, max_nodes.min(needed));
        for (index, row) in matrix.iter().enumerate().rev() {
            let columns = row
                .as_ref()
                .iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(|(column, _)| column + 1);

            grid.add_row(index + 1, columns);
        }

        Ok(Self::from_grid(grid, max_nodes))
    }

    /// Create a solver from the coordinates of the `true` entries of a matrix
    /// with `num_columns` columns.
    ///
    /// Coordinates are `(row, column)` pairs and are 1-based, matching the
    /// indexing notation for matrices in general. Repeated coordinates are
    /// only counted once. Rows are not required to be contiguous: a row with
    /// no coordinates is simply a row that can never be chosen.
    pub fn from_coordinates(
        num_columns: usize,
        filled_coordinates: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, Error> {
        if num_columns == 0 {
            return Err(Error::NoColumns);
        }

        let mut coordinates = filled_coordinates
            .into_iter()
            .map(|(row, column)| {
                if row == 0 || column == 0 {
                    Err(Error::ZeroIndex { row, column })
                } else if column > num_columns {
                    Err(Error::ColumnOutOfRange {
                        row,
                        column,
                        num_columns,
                    })
                } else {
                    Ok((row, column))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Same insertion order as the dense constructor: last row first,
        // columns ascending within a row
        coordinates.sort_unstable_by(|(row_a, col_a), (row_b, col_b)| {
            row_b.cmp(row_a).then(col_a.cmp(col_b))
        });
        coordinates.dedup();

        let max_nodes = required_nodes(num_columns, coordinates.len())?;
        let mut grid = Grid::with_capacity(num_columns, max_nodes);
        let mut start = 0;
        while start < coordinates.len() {
            let row = coordinates[start].0;
            let end = coordinates[start..]
                .iter()
                .position(|(other, _)| *other != row)
                .map_or(coordinates.len(), |offset| start + offset);

            grid.add_row(row, coordinates[start..end].iter().map(|(_, column)| *column));
            start = end;
        }

        Ok(Self::from_grid(grid, max_nodes))
    }

    fn from_grid(grid: Grid, max_nodes: usize) -> Self {
        if grid.node_count() > max_nodes {
            log::debug!(
                "Node arena grew past the capacity hint [{}] to [{}] nodes.",
                max_nodes,
                grid.node_count()
            );
        }

        log::debug!(
            "Built grid with [{}] rows, [{}] columns and [{}] nodes.",
            grid.num_rows(),
            grid.num_columns(),
            grid.node_count()
        );

        Solver {
            grid,
            partial_solution: Vec::new(),
            stack: Vec::new(),
            state: State::Ready,
        }
    }

    /// Search for an exact cover, returning true if one was found.
    ///
    /// The cover is available from [`Solver::solution`] afterwards. Calling
    /// this again does not search any further: it keeps reporting the outcome
    /// of the first search until [`Solver::reset`] is called.
    pub fn solve(&mut self) -> bool {
        match self.state {
            State::Ready => self.next_solution().is_some(),
            State::Solved => true,
            State::Exhausted => false,
        }
    }

    /// Return the rows of the cover found by the last search, in the order
    /// they were chosen.
    ///
    /// The slice is empty if no cover has been found.
    pub fn solution(&self) -> &[usize] {
        match self.state {
            State::Solved => &self.partial_solution,
            State::Ready | State::Exhausted => &[],
        }
    }

    /// Continue the search up to the next exact cover, returning `None` once
    /// there are no more.
    ///
    /// Every cover of the matrix is reported exactly once.
    pub fn next_solution(&mut self) -> Option<Vec<usize>> {
        // Resuming after a cover means moving on from the row chosen last
        let mut backtracking = match self.state {
            State::Ready => false,
            State::Solved => true,
            State::Exhausted => return None,
        };

        loop {
            if !backtracking {
                let Some(column) = self.grid.select_branch_column() else {
                    log::debug!("Found cover {:?}.", self.partial_solution);

                    self.state = State::Solved;
                    return Some(self.partial_solution.clone());
                };

                log::trace!(
                    "Branching on column [{}] with [{}] rows at depth [{}].",
                    column,
                    self.grid.column_size(column),
                    self.stack.len()
                );

                self.grid.remove_column(column);
                self.stack.push(Frame {
                    column,
                    row: column,
                });
            }

            let Some(frame) = self.stack.last().copied() else {
                log::debug!("Search exhausted.");

                self.state = State::Exhausted;
                return None;
            };

            if frame.row != frame.column {
                self.deselect_row(frame.row);
            }

            let next_row = self.grid.step(frame.row, Direction::Down);
            if next_row == frame.column {
                log::trace!("Backtracking out of column [{}].", frame.column);

                self.grid.resume_column(frame.column);
                self.stack.pop();
                backtracking = true;
            } else {
                if let Some(top) = self.stack.last_mut() {
                    top.row = next_row;
                }
                self.select_row(next_row);
                backtracking = false;
            }
        }
    }

    /// Add the row of `node` to the solution and remove every other column
    /// it covers.
    fn select_row(&mut self, node: usize) {
        self.partial_solution.push(self.grid.row(node));

        let mut current = self.grid.step(node, Direction::Right);
        while current != node {
            self.grid.remove_column(self.grid.column(current));
            current = self.grid.step(current, Direction::Right);
        }
    }

    fn deselect_row(&mut self, node: usize) {
        let mut current = self.grid.step(node, Direction::Left);
        while current != node {
            self.grid.resume_column(self.grid.column(current));
            current = self.grid.step(current, Direction::Left);
        }

        self.partial_solution.pop();
    }

    /// Restore the grid to the state it was built in and forget any cover
    /// found so far, so the search can be run again.
    pub fn reset(&mut self) {
        while let Some(frame) = self.stack.pop() {
            if frame.row != frame.column {
                self.deselect_row(frame.row);
            }
            self.grid.resume_column(frame.column);
        }

        debug_assert!(self.partial_solution.is_empty());
        self.state = State::Ready;
    }

    /// Return all covers not reported yet.
    pub fn all_solutions(&mut self) -> Vec<Vec<usize>> {
        self.collect()
    }

    /// Number of rows of the input matrix.
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    /// Number of columns of the input matrix.
    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    /// Live entries per column in the current state of the search.
    ///
    /// Index `c` holds the count for column `c`, index `0` belongs to the root
    /// of the grid and is always zero.
    pub fn column_sizes(&self) -> &[usize] {
        self.grid.column_sizes()
    }
}

/// Number of nodes in a grid: the root, one header per column and one node
/// per entry.
fn required_nodes(num_columns: usize, num_filled: usize) -> Result<usize, Error> {
    num_columns
        .checked_add(1)
        .and_then(|headers| headers.checked_add(num_filled))
        .ok_or(Error::TooManyColumns { num_columns })
}

impl Iterator for Solver {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}
