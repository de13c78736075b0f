//! Game configuration.
//!
//! The only configurable aspect of a game is its mode. The mode is stored in
//! every `GameState` and carried through each move unchanged; it does not
//! alter rule evaluation. `Survival` is reserved for a future rule variant.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Game mode tag.
///
/// Parses from and renders as lowercase names.
///
/// ```
/// use ultimate_ttt::core::GameMode;
///
/// let mode: GameMode = "survival".parse().unwrap();
/// assert_eq!(mode, GameMode::Survival);
/// assert_eq!(GameMode::Normal.to_string(), "normal");
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    /// Standard Ultimate Tic-Tac-Toe.
    #[default]
    Normal,
    /// Placeholder for a future variant; plays by the standard rules.
    Survival,
}
