#![no_main]

use dlx_cover::Solver;
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct SmallMatrix {
    rows: Vec<Vec<bool>>,
}

impl<'a> arbitrary::Arbitrary<'a> for SmallMatrix {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let num_rows: usize = u.int_in_range(1..=12)?;
        let num_columns: u32 = u.int_in_range(1..=8)?;

        let rows = (0..num_rows)
            .map(|_| {
                u.arbitrary::<u8>().map(|bits| {
                    (0..num_columns)
                        .map(|column| bits & (1 << column) != 0)
                        .collect()
                })
            })
            .collect::<arbitrary::Result<_>>()?;

        Ok(SmallMatrix { rows })
    }
}

fuzz_target!(|matrix: SmallMatrix| {
    let mut solver = Solver::new(&matrix.rows).unwrap();
    let built = solver.column_sizes().to_vec();

    for cover in solver.by_ref() {
        for column in 0..matrix.rows[0].len() {
            let covered = cover
                .iter()
                .filter(|row| matrix.rows[**row - 1][column])
                .count();
            assert_eq!(covered, 1);
        }
    }

    assert_eq!(solver.column_sizes(), built.as_slice());
});
