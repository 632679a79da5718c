//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat identifier. Seat order is turn order.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `SeatId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier.
///
/// Seat indices are 0-based: the first seat is `SeatId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around `seat_count`.
    ///
    /// ```
    /// use rail_barons::core::SeatId;
    ///
    /// assert_eq!(SeatId::new(2).next(4), SeatId::new(3));
    /// assert_eq!(SeatId::new(3).next(4), SeatId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, seat_count: usize) -> Self {
        Self(((self.index() + 1) % seat_count) as u8)
    }

    /// Iterate over all seat IDs for a table of `seat_count` seats.
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use rail_barons::core::{SeatId, SeatMap};
///
/// let mut scores: SeatMap<u32> = SeatMap::with_value(4, 0);
/// scores[SeatId::new(1)] += 7;
/// assert_eq!(scores[SeatId::new(1)], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(seat_count: usize, factory: impl FnMut(SeatId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = (0..seat_count as u8).map(SeatId).map(factory).collect();
        Self { data }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(seat_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(seat_count, |_| value.clone())
    }

    /// Wrap an existing vector, one entry per seat in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 seat");
        assert!(data.len() <= 255, "At most 255 seats supported");
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (SeatId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over (SeatId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SeatId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Transform every entry, keeping seat positions.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> SeatMap<U> {
        SeatMap {
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_basics() {
        let s0 = SeatId::new(0);
        assert_eq!(s0.index(), 0);
        assert_eq!(format!("{}", s0), "Seat 0");
    }

    #[test]
    fn test_next_wraps() {
        let mut seat = SeatId::new(0);
        for _ in 0..4 {
            seat = seat.next(4);
        }
        assert_eq!(seat, SeatId::new(0));
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<u32> = SeatMap::new(4, |s| s.index() as u32 * 10);

        assert_eq!(map[SeatId::new(0)], 0);
        assert_eq!(map[SeatId::new(3)], 30);
        assert_eq!(map.seat_count(), 4);
    }

    #[test]
    fn test_seat_map_iter_and_map() {
        let map: SeatMap<u32> = SeatMap::from_vec(vec![5, 6, 7]);
        let doubled = map.map(|v| v * 2);

        let pairs: Vec<_> = doubled.iter().collect();
        assert_eq!(pairs[0], (SeatId::new(0), &10));
        assert_eq!(pairs[2], (SeatId::new(2), &14));
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<u32> = SeatMap::new(2, |s| s.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 seat")]
    fn test_seat_map_zero_seats() {
        let _: SeatMap<u32> = SeatMap::with_value(0, 0);
    }
}
