use super::super::{Board, Color, Square};

impl Board {
    /// Ray-walk in each direction until the edge, an own piece (exclusive)
    /// or an enemy piece (inclusive).
    pub(crate) fn slider_destinations(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut destinations = Vec::new();
        for &(d_file, d_rank) in directions {
            let mut current = from;
            while let Some(next) = current.offset(d_file, d_rank) {
                match self.piece_at(next) {
                    None => destinations.push(next),
                    Some(piece) => {
                        if piece.color != color {
                            destinations.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        destinations
    }
}
