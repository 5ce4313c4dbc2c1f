use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// Neither Copy nor Clone: a piece can occupy at most one slot, and only the
// owning queue mints ids.
#[derive(Debug, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    id: u32,
}

impl Piece {
    pub(super) fn new(kind: PieceKind, id: u32) -> Piece {
        Piece { kind, id }
    }

    pub fn get_kind(&self) -> PieceKind {
        self.kind
    }

    pub fn get_id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.kind, self.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static_assertions::assert_not_impl_any!(Piece: Copy, Clone);

    #[test]
    fn display_piece() {
        let piece = Piece::new(PieceKind::T, 12);

        assert_eq!(piece.to_string(), "T (ID: 12)");
    }

    #[test]
    fn kinds_are_distinct_symbols() {
        let symbols: String = PieceKind::ALL.iter().map(|kind| kind.as_char()).collect();

        assert_eq!(symbols, "IOTL");
    }
}
