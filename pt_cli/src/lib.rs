//! Input collection and result presentation for the prize tier calculator.
//!
//! This library provides the configuration layer and the renderers used by
//! the pt_cli binary. All allocation logic lives in `prize_tiers`.

pub mod config;
pub mod render;
