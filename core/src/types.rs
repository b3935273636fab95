//! Shared primitive types used across the companion site.

/// A roster player identifier (the game's own player id).
pub type PlayerId = i64;

/// Money in whole currency units. Balances may go negative.
pub type Amount = i64;

/// A position slot label inside a formation, e.g. "CB1".
pub type SlotLabel = String;
