//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Pinochle here is always two-handed: one computer seat and one human seat.
//! The discriminants double as save-file order (computer first).
//!
//! ## SeatMap
//!
//! Fixed-size per-seat storage backed by a `[T; 2]` for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    Computer = 0,
    Human = 1,
}

impl Seat {
    /// Both seats, in save-file order.
    pub const ALL: [Seat; 2] = [Seat::Computer, Seat::Human];

    /// Get the raw seat index (0 = computer, 1 = human).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The seat across the table.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::Computer => Seat::Human,
            Seat::Human => Seat::Computer,
        }
    }

    /// Lowercase name used in messages ("the human's turn").
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Seat::Computer => "computer",
            Seat::Human => "human",
        }
    }

    /// Capitalized name used in save files.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Seat::Computer => "Computer",
            Seat::Human => "Human",
        }
    }

    /// Parse a save-file seat name.
    #[must_use]
    pub fn from_title(title: &str) -> Option<Seat> {
        match title {
            "Computer" => Some(Seat::Computer),
            "Human" => Some(Seat::Human),
            _ => None,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use pinochle::core::{Seat, SeatMap};
///
/// let mut scores: SeatMap<u32> = SeatMap::with_value(0);
/// scores[Seat::Human] += 40;
///
/// assert_eq!(scores[Seat::Human], 40);
/// assert_eq!(scores[Seat::Computer], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Computer), factory(Seat::Human)],
        }
    }

    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in save-file order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Build a new map by transforming each entry.
    pub fn map<U>(&self, mut f: impl FnMut(Seat, &T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(seat, self.get(seat)))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
