//! Localized text overlay
//!
//! A game strings document holds localized text fragments addressed by
//! category, field name and key:
//!
//! ```json
//! {
//!   "meta": { "locale": "kokr", "version": "2.55.0.87306" },
//!   "gamestrings": {
//!     "unit": { "name": { "Abathur": "아바투르" } },
//!     "abiltalent": { "name": { "AbathurSymbiote|AbathurSymbiote|Q|False": "공생체" } }
//!   }
//! }
//! ```
//!
//! [`GameStringDocument`] reads that tree; the [`Localize`] implementations
//! splice its fragments into already assembled entities.

mod game_strings;
mod overlay;

pub use game_strings::{GAMESTRINGS_FIELD, GameStringDocument};
pub use overlay::{Localize, categories};
