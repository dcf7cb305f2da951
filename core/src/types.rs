//! Shared primitive types used across the whole game.

/// A game round. One round = one in-game year of the reign.
pub type Round = u32;

/// Wheat, measured in bushels.
pub type Bushels = u32;

/// Land, measured in acres.
pub type Acres = u32;

/// A head count of citizens.
pub type People = u32;
