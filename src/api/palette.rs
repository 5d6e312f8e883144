use crate::render::Color;

/// Ten-color categorical cycle; curve `n` of an axis takes entry `n % 10`.
pub const CATEGORY_PALETTE: [Color; 10] = [
    Color::from_hex(0x1f77b4),
    Color::from_hex(0xff7f0e),
    Color::from_hex(0x2ca02c),
    Color::from_hex(0xd62728),
    Color::from_hex(0x9467bd),
    Color::from_hex(0x8c564b),
    Color::from_hex(0xe377c2),
    Color::from_hex(0x7f7f7f),
    Color::from_hex(0xbcbd22),
    Color::from_hex(0x17becf),
];

/// Color of the curves for `item_count` items per craft (counts start at 1).
#[must_use]
pub fn item_color(item_count: u32) -> Color {
    let index = item_count.saturating_sub(1) as usize % CATEGORY_PALETTE.len();
    CATEGORY_PALETTE[index]
}

#[cfg(test)]
mod tests {
    use super::{CATEGORY_PALETTE, item_color};

    #[test]
    fn item_counts_start_the_cycle() {
        assert_eq!(item_color(1), CATEGORY_PALETTE[0]);
        assert_eq!(item_color(9), CATEGORY_PALETTE[8]);
        assert_eq!(item_color(11), CATEGORY_PALETTE[0]);
    }

    #[test]
    fn palette_colors_are_valid() {
        for color in CATEGORY_PALETTE {
            color.validate().expect("valid color");
        }
    }
}
