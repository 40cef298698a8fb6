use super::super::{Board, Color, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Board {
    pub(crate) fn knight_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        self.leaper_destinations(from, color, &KNIGHT_OFFSETS)
    }

    /// Fixed-offset targets that are empty or hold an enemy piece
    pub(crate) fn leaper_destinations(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
    ) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(d_file, d_rank)| from.offset(d_file, d_rank))
            .filter(|&to| self.piece_at(to).map_or(true, |piece| piece.color != color))
            .collect()
    }
}
