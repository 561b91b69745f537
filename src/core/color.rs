//! Token colors and per-color data storage.
//!
//! ## Color
//!
//! The closed five-color palette. Colors are assigned to players in
//! palette order, so a game's colors are always a prefix of `Color::ALL`.
//!
//! ## ColorMap
//!
//! Per-color data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A token color from the fixed palette.
///
/// Declaration order is assignment order: a 3-player game uses
/// `Red`, `Yellow`, `Green`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Brown,
}

impl Color {
    /// All palette colors in assignment order.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Brown,
    ];

    /// Number of palette colors (also the maximum player count).
    pub const COUNT: usize = Self::ALL.len();

    /// Stable 0-based index of this color in the palette.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The first `count` palette colors, in assignment order.
    #[must_use]
    pub fn palette(count: usize) -> &'static [Color] {
        assert!(count <= Self::COUNT, "At most 5 colors in the palette");
        &Self::ALL[..count]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Brown => "brown",
        };
        write!(f, "{name}")
    }
}

/// Per-color data storage with O(1) access.
///
/// Backed by one entry per palette color. Entries for colors not in play
/// simply stay at their initial value.
///
/// ## Example
///
/// ```
/// use corsair::core::{Color, ColorMap};
///
/// let mut tokens: ColorMap<u8> = ColorMap::with_value(0);
///
/// tokens[Color::Red] = 6;
/// assert_eq!(tokens[Color::Red], 6);
/// assert_eq!(tokens[Color::Blue], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; Color::COUNT],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    ///
    /// The factory receives the `Color` for each entry.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Color::ALL[i])),
        }
    }

    /// Create a new ColorMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new ColorMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a color's entry.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's entry.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (Color::ALL[i], v))
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
