//! Rule engine for votes and night actions.
//!
//! - `engine`: the `RuleEngine` trait the `Game` delegates to
//! - `baseline`: villagers, werewolves and the win check
//! - `roles`: one handler per special role plus the dispatch table
//! - `ruleset`: baseline + enabled handlers, and its builder
//! - `tally`: plurality selection with strict tie-breaking

pub mod baseline;
pub mod engine;
pub mod roles;
pub mod ruleset;
pub mod tally;

pub use baseline::BaseRules;
pub use engine::{RoleSet, RuleEngine, VoteMap};
pub use roles::{ClairvoyantRules, EscortRules, HandlerTable, MediumRules, RoleHandler};
pub use ruleset::{Ruleset, RulesetBuilder};
pub use tally::plurality;
