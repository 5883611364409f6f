//! Exact heads-up equity for two fixed pockets.
//!
//! Every 5-card board over the 48 unseen cards is enumerated, both 7-card
//! hands are classified from a 52-bit mask and the showdown is tallied.
//!
//! ```no_run
//! use hu_equity::equity::{EnumerationConfig, Matchup};
//!
//! let m = Matchup::parse(&["AS", "AH"], &["KS", "KH"]).unwrap();
//! let r = m.evaluate(&EnumerationConfig::default()).unwrap();
//! assert_eq!(r.iterations, 1_712_304);
//! ```

pub mod card_encoding;
pub mod cards;
pub mod cli;
pub mod combinations;
pub mod display;
pub mod equity;
pub mod error;
pub mod hand;
pub mod hand_evaluator;
pub mod showdown;
