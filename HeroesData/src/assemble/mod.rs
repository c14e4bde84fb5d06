//! Record assembly
//!
//! Turns raw document records into typed entities. [`abilities`] holds the
//! tiered ability/talent walk shared by heroes and units; [`units`] and
//! [`collection`] implement [`Entity`](crate::document::Entity) for each
//! concrete kind.

pub mod abilities;
mod collection;
mod units;

pub use abilities::{
    ABILITIES_FIELD, SUB_ABILITIES_FIELD, TALENTS_FIELD, assemble_abilities, assemble_sub_abilities,
    assemble_talents, assemble_tiers, build_ability, build_talent,
};
