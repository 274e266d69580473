//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};

use anyhow::bail;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A candidate move: the piece standing on `from` goes to `to`. The side
/// claiming the move is supplied separately because it is not derived from the
/// board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;

    /// Parses a move in coordinate notation, e.g. "e2e4".
    fn try_from(input: &str) -> anyhow::Result<Self> {
        if input.len() != 4 || !input.is_ascii() {
            bail!("move should be four ASCII chars (e.g. \"e2e4\"), got \"{input}\"");
        }
        let (from, to) = input.split_at(2);
        Ok(Self::new(from.try_into()?, to.try_into()?))
    }
}

impl fmt::Display for Move {
    /// Serializes a move in [UCI format] (without promotion suffix, promotions
    /// are not modelled).
    ///
    /// [UCI format]: http://wbec-ridderkerk.nl/html/UCIProtocol.html
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Board squares in the order of the host buffer: from left to right, from
/// the top (Black's back rank) to the bottom. The discriminant of each square
/// is its index in the buffer, `row * 8 + col`.
///
/// ```
/// use sightline::chess::core::Square;
///
/// assert_eq!(Square::A8 as u8, 0);
/// assert_eq!(Square::H8 as u8, 7);
/// assert_eq!(Square::A1 as u8, 8 * 7);
/// assert_eq!(Square::E2.row(), 6);
/// assert_eq!(Square::E2.col(), 4);
/// ```
///
/// Square is a compact representation using only one byte.
///
/// ```
/// use sightline::chess::core::Square;
///
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A8, B8, C8, D8, E8, F8, G8, H8, // Row 0
    A7, B7, C7, D7, E7, F7, G7, H7, // Row 1
    A6, B6, C6, D6, E6, F6, G6, H6, // Row 2
    A5, B5, C5, D5, E5, F5, G5, H5, // Row 3
    A4, B4, C4, D4, E4, F4, G4, H4, // Row 4
    A3, B3, C3, D3, E3, F3, G3, H3, // Row 5
    A2, B2, C2, D2, E2, F2, G2, H2, // Row 6
    A1, B1, C1, D1, E1, F1, G1, H1, // Row 7
}

impl Square {
    #[rustfmt::skip]
    const ALL: [Self; BOARD_SIZE as usize] = [
        Self::A8, Self::B8, Self::C8, Self::D8, Self::E8, Self::F8, Self::G8, Self::H8,
        Self::A7, Self::B7, Self::C7, Self::D7, Self::E7, Self::F7, Self::G7, Self::H7,
        Self::A6, Self::B6, Self::C6, Self::D6, Self::E6, Self::F6, Self::G6, Self::H6,
        Self::A5, Self::B5, Self::C5, Self::D5, Self::E5, Self::F5, Self::G5, Self::H5,
        Self::A4, Self::B4, Self::C4, Self::D4, Self::E4, Self::F4, Self::G4, Self::H4,
        Self::A3, Self::B3, Self::C3, Self::D3, Self::E3, Self::F3, Self::G3, Self::H3,
        Self::A2, Self::B2, Self::C2, Self::D2, Self::E2, Self::F2, Self::G2, Self::H2,
        Self::A1, Self::B1, Self::C1, Self::D1, Self::E1, Self::F1, Self::G1, Self::H1,
    ];

    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self::ALL[((BOARD_WIDTH - 1 - rank as u8) * BOARD_WIDTH + file as u8) as usize]
    }

    /// Creates a square from host coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSquare`] if either coordinate is outside
    /// of 0..[`BOARD_WIDTH`].
    pub fn from_row_col(row: i64, col: i64) -> crate::Result<Self> {
        let width = i64::from(BOARD_WIDTH);
        if !(0..width).contains(&row) || !(0..width).contains(&col) {
            return Err(crate::Error::InvalidSquare { row, col });
        }
        // Both coordinates are within 0..8: the index is within 0..64.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let index = (row * width + col) as usize;
        Ok(Self::ALL[index])
    }

    /// Row of the square in the host buffer, 0 being Black's back rank.
    #[must_use]
    pub const fn row(self) -> u8 {
        self as u8 / BOARD_WIDTH
    }

    /// Column of the square in the host buffer, 0 being the a-file.
    #[must_use]
    pub const fn col(self) -> u8 {
        self as u8 % BOARD_WIDTH
    }

    /// Position of the square in the 64-cell buffer.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        File::ALL[self.col() as usize]
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(BOARD_WIDTH - 1 - self.row()) as usize]
    }

    /// Moves the square by the given number of rows and columns. Returns
    /// [`None`] if the result falls off the board.
    #[must_use]
    pub fn offset(self, rows: i8, cols: i8) -> Option<Self> {
        Self::from_row_col(
            i64::from(self.row()) + i64::from(rows),
            i64::from(self.col()) + i64::from(cols),
        )
        .ok()
    }

    /// Iterates over all squares in buffer order.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    /// Creates a square given its position in the board buffer.
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> anyhow::Result<Self> {
        match Self::ALL.get(square_index as usize) {
            Some(&square) => Ok(square),
            None => bail!("square index should be in 0..BOARD_SIZE, got {square_index}"),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            )
        };
        Ok(Self::new(file.try_into()?, rank.try_into()?))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Ok(Self::ALL[(file as u8 - b'a') as usize]),
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0). Note that ranks grow towards the top of the
/// board while buffer rows grow towards the bottom.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
    ];
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Ok(Self::ALL[(rank as u8 - b'1') as usize]),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Maps the host's "is White to move" flag.
    #[must_use]
    pub const fn from_is_white(is_white: bool) -> Self {
        if is_white {
            Self::White
        } else {
            Self::Black
        }
    }

    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row increment of a pawn push: White advances towards row 0.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row on which the player's pawns start and may advance by two squares.
    #[must_use]
    pub const fn pawns_starting_row(self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Rook, bishop and queen need an unobstructed path to their target.
    #[must_use]
    pub const fn is_sliding(self) -> bool {
        matches!(self, Self::Queen | Self::Rook | Self::Bishop)
    }

    const fn from_lowercase(symbol: u8) -> Option<Self> {
        match symbol {
            b'k' => Some(Self::King),
            b'q' => Some(Self::Queen),
            b'r' => Some(Self::Rook),
            b'b' => Some(Self::Bishop),
            b'n' => Some(Self::Knight),
            b'p' => Some(Self::Pawn),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        })
    }
}

/// Represents a specific piece owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// Decodes the host's one-byte piece encoding: uppercase letters
    /// "KQRBNP" are White pieces, lowercase ones are Black. Returns [`None`]
    /// for any other value, including the empty cell.
    #[must_use]
    pub const fn from_symbol(symbol: u8) -> Option<Self> {
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        match PieceKind::from_lowercase(symbol.to_ascii_lowercase()) {
            Some(kind) => Some(Self::new(owner, kind)),
            None => None,
        }
    }

    /// Inverse of [`Piece::from_symbol`].
    #[must_use]
    pub const fn symbol(self) -> u8 {
        let lowercase = match self.kind {
            PieceKind::King => b'k',
            PieceKind::Queen => b'q',
            PieceKind::Rook => b'r',
            PieceKind::Bishop => b'b',
            PieceKind::Knight => b'n',
            PieceKind::Pawn => b'p',
        };
        match self.owner {
            Player::White => lowercase.to_ascii_uppercase(),
            Player::Black => lowercase,
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match u8::try_from(symbol).ok().and_then(Self::from_symbol) {
            Some(piece) => Ok(piece),
            None => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol() as char)
    }
}

#[cfg(test)]
mod test {
    use std::mem::{size_of, size_of_val};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rank() {
        assert_eq!(
            ('1'..='9')
                .filter_map(|ch| Rank::try_from(ch).ok())
                .collect::<Vec<Rank>>(),
            vec![
                Rank::One,
                Rank::Two,
                Rank::Three,
                Rank::Four,
                Rank::Five,
                Rank::Six,
                Rank::Seven,
                Rank::Eight,
            ]
        );
    }

    #[test]
    #[should_panic(expected = "rank should be within '1'..='8', got '9'")]
    fn rank_from_incorrect_char() {
        let _ = Rank::try_from('9').unwrap();
    }

    #[test]
    #[should_panic(expected = "rank should be within '1'..='8', got '0'")]
    fn rank_from_incorrect_char_zero() {
        let _ = Rank::try_from('0').unwrap();
    }

    #[test]
    fn file() {
        assert_eq!(
            ('a'..='i')
                .filter_map(|ch| File::try_from(ch).ok())
                .collect::<Vec<File>>(),
            vec![
                File::A,
                File::B,
                File::C,
                File::D,
                File::E,
                File::F,
                File::G,
                File::H,
            ]
        );
    }

    #[test]
    #[should_panic(expected = "file should be within 'a'..='h', got 'i'")]
    fn file_from_incorrect_char() {
        let _ = File::try_from('i').unwrap();
    }

    #[test]
    fn square() {
        let squares: Vec<_> = [
            0u8,
            BOARD_SIZE - 1,
            BOARD_WIDTH - 1,
            BOARD_WIDTH,
            BOARD_WIDTH * 2 + 5,
            BOARD_SIZE,
        ]
        .iter()
        .filter_map(|square| Square::try_from(*square).ok())
        .collect();
        assert_eq!(
            squares,
            vec![Square::A8, Square::H1, Square::H8, Square::A7, Square::F6]
        );
        let squares: Vec<_> = [
            (File::B, Rank::Three),
            (File::F, Rank::Five),
            (File::H, Rank::Eight),
            (File::E, Rank::Four),
            (File::A, Rank::One),
        ]
        .iter()
        .map(|(file, rank)| Square::new(*file, *rank))
        .collect();
        assert_eq!(
            squares,
            vec![Square::B3, Square::F5, Square::H8, Square::E4, Square::A1]
        );
    }

    #[test]
    fn square_coordinates() {
        for square in Square::iter() {
            assert_eq!(square.index(), (square.row() * 8 + square.col()) as usize);
            assert_eq!(Square::new(square.file(), square.rank()), square);
            assert_eq!(
                Square::from_row_col(square.row().into(), square.col().into()).unwrap(),
                square
            );
        }
        assert_eq!(Square::iter().count(), BOARD_SIZE as usize);
        assert_eq!((Square::A1.row(), Square::A1.col()), (7, 0));
        assert_eq!((Square::E4.row(), Square::E4.col()), (4, 4));
        assert_eq!((Square::H8.row(), Square::H8.col()), (0, 7));
    }

    #[test]
    fn square_from_out_of_board_coordinates() {
        for (row, col) in [(8, 0), (0, 8), (-1, 3), (3, -1), (i64::MAX, i64::MIN)] {
            assert_eq!(
                Square::from_row_col(row, col),
                Err(crate::Error::InvalidSquare { row, col })
            );
        }
    }

    #[test]
    #[should_panic(expected = "square index should be in 0..BOARD_SIZE, got 64")]
    fn square_from_incorrect_index() {
        let _ = Square::try_from(BOARD_SIZE).unwrap();
    }

    #[test]
    fn square_notation() {
        assert_eq!(Square::try_from("e2").unwrap(), Square::E2);
        assert_eq!(Square::try_from("h8").unwrap(), Square::H8);
        assert_eq!(Square::C6.to_string(), "c6");
        assert!(Square::try_from("e").is_err());
        assert!(Square::try_from("e22").is_err());
        assert!(Square::try_from("i1").is_err());
    }

    #[test]
    fn primitive_size() {
        assert_eq!(size_of::<Square>(), 1);
        // Primitives will have small size thanks to the niche optimizations:
        // https://rust-lang.github.io/unsafe-code-guidelines/layout/enums.html#layout-of-a-data-carrying-enums-without-a-repr-annotation
        assert_eq!(size_of::<PieceKind>(), size_of::<Option<PieceKind>>());
        assert_eq!(size_of::<Piece>(), size_of::<Option<Piece>>());
        let square_to_pieces: [Option<Piece>; BOARD_SIZE as usize] = [None; BOARD_SIZE as usize];
        assert_eq!(size_of_val(&square_to_pieces), 2 * BOARD_SIZE as usize);
    }

    #[test]
    fn within_board_offset() {
        let square = Square::E4;
        assert_eq!(square.offset(0, -1), Some(Square::D4));
        assert_eq!(square.offset(-1, 0), Some(Square::E5));
        assert_eq!(square.offset(1, 0), Some(Square::E3));
        assert_eq!(square.offset(-1, 1), Some(Square::F5));
        assert_eq!(square.offset(2, -1), Some(Square::D2));
    }

    #[test]
    fn corner_squares_offset() {
        assert_eq!(Square::A8.offset(-1, 0), None);
        assert_eq!(Square::A8.offset(0, -1), None);
        assert_eq!(Square::A8.offset(1, 1), Some(Square::B7));
        assert_eq!(Square::H1.offset(1, 0), None);
        assert_eq!(Square::H1.offset(0, 1), None);
        assert_eq!(Square::H1.offset(-7, -7), Some(Square::A8));
    }

    #[test]
    fn player() {
        assert_eq!(Player::from_is_white(true), Player::White);
        assert_eq!(Player::from_is_white(false), Player::Black);
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::White.forward(), -1);
        assert_eq!(Player::Black.forward(), 1);
        assert_eq!(Player::White.pawns_starting_row(), Square::E2.row());
        assert_eq!(Player::Black.pawns_starting_row(), Square::E7.row());
        assert_eq!(Player::Black.to_string(), "b");
    }

    #[test]
    fn piece_symbols() {
        for symbol in "KQRBNPkqrbnp".bytes() {
            let piece = Piece::from_symbol(symbol).unwrap();
            assert_eq!(piece.symbol(), symbol);
            assert_eq!(
                piece.owner,
                Player::from_is_white(symbol.is_ascii_uppercase())
            );
        }
        assert_eq!(
            Piece::try_from('N').unwrap(),
            Piece::new(Player::White, PieceKind::Knight)
        );
        assert_eq!(
            Piece::try_from('q').unwrap(),
            Piece::new(Player::Black, PieceKind::Queen)
        );
        for symbol in [b' ', b'x', b'X', b'0', 0, 0xff] {
            assert_eq!(Piece::from_symbol(symbol), None);
        }
    }

    #[test]
    #[should_panic(expected = "piece symbol should be within \"KQRBNPkqrbnp\", got 'x'")]
    fn piece_from_incorrect_char() {
        let _ = Piece::try_from('x').unwrap();
    }

    #[test]
    fn sliding_kinds() {
        assert!(PieceKind::Queen.is_sliding());
        assert!(PieceKind::Rook.is_sliding());
        assert!(PieceKind::Bishop.is_sliding());
        assert!(!PieceKind::Knight.is_sliding());
        assert!(!PieceKind::King.is_sliding());
        assert!(!PieceKind::Pawn.is_sliding());
    }

    #[test]
    fn move_notation() {
        let parsed = Move::try_from("e2e4").unwrap();
        assert_eq!(parsed, Move::new(Square::E2, Square::E4));
        assert_eq!(parsed.to_string(), "e2e4");
        assert!(Move::try_from("e2e9").is_err());
        assert!(Move::try_from("e2e4q").is_err());
        assert!(Move::try_from("é2e4").is_err());
    }
}
