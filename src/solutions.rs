use crate::{Error, ExactCover, Solver};

/// Iterator over the solutions of an [`ExactCover`] problem.
///
/// Each solution is the list of possibilities chosen, in the order the search
/// chose them.
#[derive(Debug)]
pub struct Solutions<'e, E: ExactCover> {
    problem: &'e E,
    solver: Solver,
}

impl<'e, E> Solutions<'e, E>
where
    E: ExactCover,
{
    /// Build the constraint grid for `problem`.
    ///
    /// Possibility `i` becomes row `i + 1` and constraint `j` becomes column
    /// `j + 1`, with an entry wherever the possibility satisfies the
    /// constraint.
    pub fn new(problem: &'e E) -> Result<Self, Error> {
        let constraints = problem.constraints();
        let filled_coordinates =
            problem
                .possibilities()
                .iter()
                .enumerate()
                .flat_map(move |(row_idx, poss)| {
                    constraints
                        .iter()
                        .enumerate()
                        .filter(move |(_, cons)| problem.satisfies(poss, cons))
                        .map(move |(col_idx, _)| (row_idx + 1, col_idx + 1))
                });

        let solver = Solver::from_coordinates(constraints.len(), filled_coordinates)?;

        Ok(Solutions { problem, solver })
    }

    fn lookup(&self, rows: &[usize]) -> Vec<&'e E::Possibility> {
        let problem = self.problem;
        let possibilities = problem.possibilities();

        rows.iter().map(|row| &possibilities[row - 1]).collect()
    }

    /// Return the first solution found, or `None` if the problem has none.
    ///
    /// Repeated calls return the same solution.
    pub fn first_solution(&mut self) -> Option<Vec<&'e E::Possibility>> {
        if self.solver.solve() {
            Some(self.lookup(self.solver.solution()))
        } else {
            None
        }
    }

    /// Compute up to the next solution, returning `None` if there are no more.
    pub fn next_solution(&mut self) -> Option<Vec<&'e E::Possibility>> {
        let rows = self.solver.next_solution()?;

        Some(self.lookup(&rows))
    }

    /// Return all solutions not reported yet.
    pub fn all_solutions(&mut self) -> Vec<Vec<&'e E::Possibility>> {
        self.collect()
    }

    /// Start over from the first solution.
    pub fn reset(&mut self) {
        self.solver.reset();
    }
}

impl<'e, E> Iterator for Solutions<'e, E>
where
    E: ExactCover,
{
    type Item = Vec<&'e E::Possibility>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}
