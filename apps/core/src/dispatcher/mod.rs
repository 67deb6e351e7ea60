//! # Dispatcher Module
//!
//! Turns free-text chat input into a canned response plus an optional,
//! delayed host-page action. No model, no scoring: an ordered rule table
//! evaluated first-match-wins.
//!
//! ## Components
//! - `keywords`: normalisation, boundary-aware keyword containment, numeric shortcuts
//! - `tone`: hyped / casual / coarse tone signals
//! - `topic`: topic and rule-tier tags
//! - `effects`: side effects and their fixed delays
//! - `random`: injectable random source for pool picks
//! - `responses`: canned text and fallback pools
//! - `rules`: the ordered matcher table
//! - `engine`: the `ResponseDispatcher`

pub mod effects;
pub mod engine;
pub mod keywords;
pub mod random;
pub mod responses;
pub mod rules;
pub mod tone;
pub mod topic;

pub use effects::{ScheduledEffect, SideEffect};
pub use engine::{Response, ResponseDispatcher};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use rules::{MatcherRule, SiteLinks};
pub use tone::{Tone, ToneSignals};
pub use topic::{RuleKind, Topic};
