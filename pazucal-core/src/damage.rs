//! Damage reduction math.
//!
//! Four reduction sources stack multiplicatively: leader skill, friend
//! leader skill, an active skill, and a count of flat 5% sources. The
//! combined factor is clamped so damage can never be amplified below zero.

use serde::{Deserialize, Serialize};

use crate::numbers::round2;

/// Flat reduction granted by one fixed source (5%).
const FLAT_SOURCE_STEP: f64 = 0.05;

/// Damage taken at or above this percent of max HP is lethal.
const LETHAL_PERCENT: f64 = 100.0;

/// The four user-entered reduction sources.
///
/// `leader`, `friend` and `skill` are fractional multipliers in `0..=1`;
/// `flat_sources` counts flat 5%-reduction sources.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReductionInputs {
    #[serde(default)]
    pub leader: f64,
    #[serde(default)]
    pub friend: f64,
    #[serde(default)]
    pub skill: f64,
    #[serde(default)]
    pub flat_sources: u32,
}

impl ReductionInputs {
    #[must_use]
    pub fn new(leader: f64, friend: f64, skill: f64, flat_sources: u32) -> Self {
        Self {
            leader,
            friend,
            skill,
            flat_sources,
        }
    }

    /// The fraction of incoming damage that still gets through.
    ///
    /// Never negative: a stack of sources past 100% reduction clamps to 0.
    #[must_use]
    pub fn total_reduce(&self) -> f64 {
        let leader_reduce = 1.0 - self.leader;
        let friend_reduce = 1.0 - self.friend;
        let skill_reduce = 1.0 - self.skill;
        let flat_reduce = 1.0 - FLAT_SOURCE_STEP * f64::from(self.flat_sources);
        (leader_reduce * friend_reduce * skill_reduce * flat_reduce).max(0.0)
    }

    /// Total reduction as a displayed percentage, rounded to two decimals.
    #[must_use]
    pub fn reduction_percent(&self) -> f64 {
        round2((1.0 - self.total_reduce()) * 100.0)
    }
}

/// One row of the survivability table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageRow {
    /// Raw enemy damage as a percent of max HP.
    pub ratio: f64,
    /// Damage after reduction, rounded to two decimals.
    pub final_percent: f64,
    pub survivable: bool,
}

/// Build the survivability table for a floor's damage ratios.
///
/// Non-finite ratios are skipped rather than rendered as error rows.
/// Survivability compares the rounded figure, so a hit that rounds up to
/// exactly 100.00 is not survivable.
#[must_use]
pub fn survival_rows(ratios: &[f64], total_reduce: f64) -> Vec<DamageRow> {
    ratios
        .iter()
        .copied()
        .filter(|ratio| ratio.is_finite())
        .map(|ratio| {
            let final_percent = round2(ratio * total_reduce);
            DamageRow {
                ratio,
                final_percent,
                survivable: final_percent < LETHAL_PERCENT,
            }
        })
        .collect()
}
