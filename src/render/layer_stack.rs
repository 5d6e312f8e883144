use serde::{Deserialize, Serialize};

/// Paint layers of a figure, listed back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Series,
    Overlay,
    Axis,
    Legend,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [Self; 6] = [
        Self::Background,
        Self::Grid,
        Self::Series,
        Self::Overlay,
        Self::Axis,
        Self::Legend,
    ];

    #[must_use]
    pub fn paint_index(self) -> usize {
        match self {
            Self::Background => 0,
            Self::Grid => 1,
            Self::Series => 2,
            Self::Overlay => 3,
            Self::Axis => 4,
            Self::Legend => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn paint_index_follows_canonical_order() {
        for (index, kind) in CanvasLayerKind::CANONICAL_ORDER.iter().enumerate() {
            assert_eq!(kind.paint_index(), index);
        }
    }
}
