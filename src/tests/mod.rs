//! Grid2D black-box test suite.

use crate::prelude::*;


/// Asserts that the grid renders to the given rows using the default print
/// options.
fn assert_rows<T: std::fmt::Display>(grid: &Grid2D<T>, expected: &[&str]) {
    let actual = grid.render_rows(&PrintOptions::default());
    assert_eq!(expected, actual.as_slice(), "Grid rendered incorrectly");
}

#[test]
fn test_print_2x2() -> anyhow::Result<()> {
    let mut grid = Grid2D::new(2, 2);
    grid.set([0, 0], 'a')?
        .set([1, 0], 'b')?
        .set([0, 1], 'c')?
        .set([1, 1], 'd')?
        .print();
    assert_rows(&grid, &["a b", "c d"]);
    Ok(())
}
