//! Index-based dancing links grid.
//!
//! Every node lives in one arena and refers to its four neighbours by index.
//! Node `0` is the root of the header ring, nodes `1..=num_columns` are the
//! column headers and the matrix entries follow them in insertion order.
//!
//! Nodes are never freed. Covering and uncovering a column only relinks
//! neighbours, so the arena is only ever appended to while the grid is built.

/// Index of the root node of the header ring.
pub(crate) const ROOT: usize = 0;

/// One of the four link directions of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,

    // Header of the column this node belongs to, itself for headers
    column: usize,
    // 1-based matrix row, 0 for headers
    row: usize,
}

impl Node {
    fn header(index: usize, num_columns: usize) -> Self {
        Node {
            left: if index == ROOT { num_columns } else { index - 1 },
            right: if index == num_columns { ROOT } else { index + 1 },
            up: index,
            down: index,
            column: index,
            row: 0,
        }
    }

    fn next(&self, direction: Direction) -> usize {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }
}

/// Sparse representation of a 0/1 matrix as four-way circular rings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Grid {
    nodes: Vec<Node>,
    // Live entries per column, index 0 belongs to the root and stays 0
    column_sizes: Vec<usize>,
    num_rows: usize,
}

impl Grid {
    /// Create a grid with `num_columns` empty columns, reserving room for
    /// `capacity` nodes (headers included).
    ///
    /// The capacity is only a hint, the arena grows past it when needed.
    pub fn with_capacity(num_columns: usize, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(num_columns + 1));
        nodes.extend((0..=num_columns).map(|index| Node::header(index, num_columns)));

        Grid {
            nodes,
            column_sizes: vec![0; num_columns + 1],
            num_rows: 0,
        }
    }

    /// Add matrix row `row` with an entry in each of the given columns.
    ///
    /// Columns are 1-based and must not repeat within a row.
    pub fn add_row(&mut self, row: usize, columns: impl IntoIterator<Item = usize>) {
        let mut first = None;
        for column in columns {
            let node = self.insert(row, column, first);
            first.get_or_insert(node);
        }

        self.num_rows = self.num_rows.max(row);
    }

    /// Allocate a node for `(row, column)`, append it to the row that starts at
    /// `first` and splice it directly below the column header.
    fn insert(&mut self, row: usize, column: usize, first: Option<usize>) -> usize {
        debug_assert!(
            (1..=self.num_columns()).contains(&column),
            "column [{}] is not a header",
            column
        );

        let index = self.nodes.len();
        let (left, right) = match first {
            Some(first) => (self.nodes[first].left, first),
            None => (index, index),
        };
        let down = self.nodes[column].down;

        self.nodes.push(Node {
            left,
            right,
            up: column,
            down,
            column,
            row,
        });
        self.relink_horizontal(index);
        self.relink_vertical(index);
        self.column_sizes[column] += 1;

        index
    }

    fn unlink_horizontal(&mut self, index: usize) {
        let Node { left, right, .. } = self.nodes[index];
        self.nodes[left].right = right;
        self.nodes[right].left = left;
    }

    fn unlink_vertical(&mut self, index: usize) {
        let Node { up, down, .. } = self.nodes[index];
        self.nodes[up].down = down;
        self.nodes[down].up = up;
    }

    fn relink_horizontal(&mut self, index: usize) {
        let Node { left, right, .. } = self.nodes[index];
        self.nodes[left].right = index;
        self.nodes[right].left = index;
    }

    fn relink_vertical(&mut self, index: usize) {
        let Node { up, down, .. } = self.nodes[index];
        self.nodes[up].down = index;
        self.nodes[down].up = index;
    }

    /// Remove `column` from the header ring, along with every row that has an
    /// entry in it.
    ///
    /// The vertical ring of `column` itself is left intact so the rows can
    /// still be enumerated and the removal undone by [`Grid::resume_column`].
    pub fn remove_column(&mut self, column: usize) {
        debug_assert!(
            (1..=self.num_columns()).contains(&column),
            "column [{}] is not a header",
            column
        );

        self.unlink_horizontal(column);

        let mut row_node = self.step(column, Direction::Down);
        while row_node != column {
            let mut node = self.step(row_node, Direction::Right);
            while node != row_node {
                self.unlink_vertical(node);
                self.column_sizes[self.nodes[node].column] -= 1;

                node = self.step(node, Direction::Right);
            }

            row_node = self.step(row_node, Direction::Down);
        }
    }

    /// Undo [`Grid::remove_column`] for the same column.
    ///
    /// Must be called in the exact reverse order of the removals.
    pub fn resume_column(&mut self, column: usize) {
        debug_assert_ne!(
            self.nodes[self.nodes[column].left].right,
            column,
            "column [{}] was not removed",
            column
        );

        let mut row_node = self.step(column, Direction::Up);
        while row_node != column {
            let mut node = self.step(row_node, Direction::Left);
            while node != row_node {
                self.relink_vertical(node);
                self.column_sizes[self.nodes[node].column] += 1;

                node = self.step(node, Direction::Left);
            }

            row_node = self.step(row_node, Direction::Up);
        }

        self.relink_horizontal(column);
    }

    /// Return true if every column has been removed.
    pub fn is_empty(&self) -> bool {
        self.nodes[ROOT].right == ROOT
    }

    /// Return the live column with the fewest live entries, the first one in
    /// ring order on ties, or `None` if no column is left.
    pub fn select_branch_column(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        self.walk(ROOT, Direction::Right)
            .min_by_key(|column| self.column_sizes[*column])
    }

    /// Return the neighbour of `index` in the given direction.
    pub fn step(&self, index: usize, direction: Direction) -> usize {
        self.nodes[index].next(direction)
    }

    /// Iterate over the ring of `origin` in the given direction, excluding
    /// `origin` itself.
    pub fn walk(&self, origin: usize, direction: Direction) -> Ring<'_> {
        Ring {
            nodes: &self.nodes,
            origin,
            current: origin,
            direction,
        }
    }

    /// The 1-based matrix row of a node.
    pub fn row(&self, index: usize) -> usize {
        self.nodes[index].row
    }

    /// The column header of a node.
    pub fn column(&self, index: usize) -> usize {
        self.nodes[index].column
    }

    pub fn column_size(&self, column: usize) -> usize {
        self.column_sizes[column]
    }

    pub fn column_sizes(&self) -> &[usize] {
        &self.column_sizes
    }

    pub fn num_columns(&self) -> usize {
        self.column_sizes.len() - 1
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Iterator over one ring of the grid.
#[derive(Debug, Clone)]
pub(crate) struct Ring<'g> {
    nodes: &'g [Node],
    origin: usize,
    current: usize,
    direction: Direction,
}

impl Iterator for Ring<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.nodes[self.current].next(self.direction);

        if next == self.origin {
            None
        } else {
            self.current = next;

            Some(next)
        }
    }
}
