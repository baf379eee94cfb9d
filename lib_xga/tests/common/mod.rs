use lib_xga::ColorIndex;

pub fn idx(value: u8) -> ColorIndex {
    ColorIndex::new(value).unwrap()
}

pub fn indices(values: &[u8]) -> Vec<ColorIndex> {
    values.iter().map(|&v| idx(v)).collect()
}

pub fn solid_grid(width: u32, height: u32, value: u8) -> Vec<ColorIndex> {
    vec![idx(value); (width * height) as usize]
}

pub fn checkerboard(width: u32, height: u32, a: u8, b: u8) -> Vec<ColorIndex> {
    let mut cells = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            cells.push(if (x + y) % 2 == 0 { idx(a) } else { idx(b) });
        }
    }
    cells
}

pub const SPRITE_WIDTH: u32 = 4;
pub const SPRITE_HEIGHT: u32 = 4;

/// A small sprite with single-cell runs, row-spanning runs and the
/// background color mixed together.
pub fn sprite() -> Vec<ColorIndex> {
    indices(&[
        15, 9, 9, 15, //
        9, 0, 0, 9, //
        9, 0, 0, 9, //
        15, 9, 9, 12,
    ])
}
