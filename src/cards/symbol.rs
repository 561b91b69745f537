//! Card symbols.
//!
//! Cards and interior board spaces share one closed set of six symbols;
//! a card has no identity beyond its symbol.

use serde::{Deserialize, Serialize};

/// One of the six card symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Sword,
    Parrot,
    Hook,
    Skull,
    Treasure,
    Rum,
}

impl Symbol {
    /// All symbols in canonical order.
    pub const ALL: [Symbol; 6] = [
        Symbol::Sword,
        Symbol::Parrot,
        Symbol::Hook,
        Symbol::Skull,
        Symbol::Treasure,
        Symbol::Rum,
    ];

    /// Number of distinct symbols.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable 0-based index of this symbol.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Symbol::Sword => "Sword",
            Symbol::Parrot => "Parrot",
            Symbol::Hook => "Hook",
            Symbol::Skull => "Skull",
            Symbol::Treasure => "Treasure",
            Symbol::Rum => "Rum",
        };
        write!(f, "{name}")
    }
}
