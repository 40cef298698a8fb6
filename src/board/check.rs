//! Check detection.

use super::error::CorruptState;
use super::{Board, Color};

impl Board {
    /// Whether `color`'s king is attacked, or `CorruptState` if it has no king.
    ///
    /// Every opposing piece is generated in attack-only mode so that castling
    /// candidates never re-enter check detection.
    pub fn check_status(&self, color: Color) -> Result<bool, CorruptState> {
        let king = self.king_square(color).ok_or(CorruptState { color })?;
        Ok(self
            .pieces(color.opponent())
            .any(|(from, _)| self.pseudo_legal(from, true).contains(&king)))
    }

    /// Whether `color`'s king is attacked.
    ///
    /// A missing king is reported as check so nothing keeps generating moves
    /// from a corrupted position.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.check_status(color).unwrap_or_else(|e| {
            log_warn!("{e}; treating {color} as in check");
            true
        })
    }
}
