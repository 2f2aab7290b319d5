#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime label taxonomy and known-location definitions.
//!
//! This crate defines the canonical set of crime-type labels the classifier
//! predicts, keyed by the integer class codes the model artifact was trained
//! with, plus the fixed list of report locations the encoder recognizes.

use rand::Rng as _;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The fixed list of locations a crime report may reference.
///
/// The one-hot encoder is fitted over exactly this list, in this order.
/// Matching is case-sensitive; the list is hard-coded rather than derived
/// from the database so the encoding stays aligned with the model artifact.
pub const KNOWN_LOCATIONS: &[&str] = &[
    "Nairobi CBD",
    "Mombasa",
    "Kisumu",
    "Nakuru",
    "Eldoret",
    "Naivasha",
    "Malindi",
    "Kitale",
    "Thika",
    "Machakos",
    "Kisii",
    "Nairobi West",
    "Busia",
    "Nyeri",
    "Meru",
    "Kericho",
    "Embu",
];

/// A predictable crime type, keyed by the classifier's integer class code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CrimeLabel {
    /// Class 1
    Assault = 1,
    /// Class 2
    Burglary = 2,
    /// Class 3
    #[strum(serialize = "Drug Possession")]
    #[serde(rename = "Drug Possession")]
    DrugPossession = 3,
    /// Class 4
    #[strum(serialize = "DUI")]
    #[serde(rename = "DUI")]
    Dui = 4,
    /// Class 5
    Fraud = 5,
    /// Class 6
    Larceny = 6,
    /// Class 7
    Robbery = 7,
    /// Class 8
    Vandalism = 8,
}

impl CrimeLabel {
    /// Returns the integer class code for this label.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Looks up the label for a classifier output code, if it is one of the
    /// eight known classes.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Assault),
            2 => Some(Self::Burglary),
            3 => Some(Self::DrugPossession),
            4 => Some(Self::Dui),
            5 => Some(Self::Fraud),
            6 => Some(Self::Larceny),
            7 => Some(Self::Robbery),
            8 => Some(Self::Vandalism),
            _ => None,
        }
    }

    /// Resolves a classifier output code to a label.
    ///
    /// Codes outside the known range are not an error: they resolve to a
    /// uniformly random member of the label set. This mirrors how the
    /// trained model has historically been consumed and must stay
    /// non-deterministic rather than collapse to a fixed default.
    #[must_use]
    pub fn resolve(code: i64) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            let all = Self::all();
            all[rand::thread_rng().gen_range(0..all.len())]
        })
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Assault,
            Self::Burglary,
            Self::DrugPossession,
            Self::Dui,
            Self::Fraud,
            Self::Larceny,
            Self::Robbery,
            Self::Vandalism,
        ]
    }
}
