use eframe::egui::Key;
use lib_xga::ColorIndex;

/// Palette selection keys in palette order: the top letter row then the
/// home row, `q..p` followed by `a..h`.
pub const PALETTE_KEYS: [Key; 16] = [
    Key::Q,
    Key::W,
    Key::E,
    Key::R,
    Key::T,
    Key::Y,
    Key::U,
    Key::I,
    Key::O,
    Key::P,
    Key::A,
    Key::S,
    Key::D,
    Key::F,
    Key::G,
    Key::H,
];

const KEY_LABELS: [char; 16] = [
    'q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', 'a', 's', 'd', 'f', 'g', 'h',
];

pub fn brush_for_key(key: Key) -> Option<ColorIndex> {
    PALETTE_KEYS
        .iter()
        .position(|&candidate| candidate == key)
        .and_then(|index| ColorIndex::new(index as u8))
}

pub fn key_label(index: ColorIndex) -> char {
    KEY_LABELS[index.get() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_for_key() {
        assert_eq!(brush_for_key(Key::Q), ColorIndex::new(0));
        assert_eq!(brush_for_key(Key::P), ColorIndex::new(9));
        assert_eq!(brush_for_key(Key::A), ColorIndex::new(10));
        assert_eq!(brush_for_key(Key::H), ColorIndex::new(15));
        assert_eq!(brush_for_key(Key::Z), None);
        assert_eq!(brush_for_key(Key::Escape), None);
    }

    #[test]
    fn test_key_labels_match_palette_keys() {
        for value in 0..16u8 {
            let index = ColorIndex::new(value).unwrap();
            let label = key_label(index);
            let key = PALETTE_KEYS[value as usize];
            assert_eq!(format!("{:?}", key).to_lowercase(), label.to_string());
        }
    }
}
