mod common;

use common::{checkerboard, indices, solid_grid, sprite};
use lib_xga::compression::{rle_compress, rle_decompress};

#[test]
fn test_comp_decomp_solid_grid() {
    let grid = solid_grid(16, 16, 7);
    let runs = rle_compress(&grid).unwrap();

    // A single-color grid compresses to one run covering the whole image.
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].count, 256);

    let decoded = rle_decompress(&runs).unwrap();
    assert_eq!(decoded, grid);
}

#[test]
fn test_comp_decomp_checkerboard() {
    // Worst case: every run has length 1.
    let grid = checkerboard(8, 8, 0, 15);
    let runs = rle_compress(&grid).unwrap();
    assert_eq!(runs.len(), 64);

    let decoded = rle_decompress(&runs).unwrap();
    assert_eq!(decoded, grid);
}

#[test]
fn test_comp_decomp_sprite() {
    let grid = sprite();
    let runs = rle_compress(&grid).unwrap();

    let total: u32 = runs.iter().map(|run| run.count).sum();
    assert_eq!(total as usize, grid.len());

    let decoded = rle_decompress(&runs).unwrap();
    assert_eq!(decoded, grid);
}

#[test]
fn test_comp_runs_cross_row_boundaries() {
    // Scanline order ignores row edges: two rows of the same color join
    // into one run.
    let grid = indices(&[3, 3, 3, 3, 3, 3, 1, 1]);
    let runs = rle_compress(&grid).unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].count, 6);
    assert_eq!(runs[1].count, 2);
}
