// ABOUTME: Enumerated form choices (diet, trimester, activity, delivery, feeding, supply, energy)
// ABOUTME: Each choice carries its display label, which is also its wire and prompt representation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::form::{WATER_INTAKE_DEFAULT, WATER_INTAKE_MAX, WATER_INTAKE_MIN};
use crate::errors::AppError;

/// Declares a closed set of form options whose label doubles as the serialized value.
///
/// The first listed variant is the control's initial selection.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option in display order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Display labels in display order
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            /// Label shown in the form and interpolated into prompts
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    other => Err(AppError::invalid_input(format!(
                        "'{other}' is not a valid {} option",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

choice_enum! {
    /// Dietary preference, shared by both stages
    DietPreference {
        /// No meat, fish or eggs
        Vegetarian => "Vegetarian",
        /// Includes meat and fish
        NonVegetarian => "Non-vegetarian",
        /// Vegetarian plus eggs
        Eggetarian => "Eggetarian",
        /// No animal products
        Vegan => "Vegan",
    }
}

choice_enum! {
    /// Current pregnancy trimester
    Trimester {
        /// Weeks 1 to 13
        First => "1",
        /// Weeks 14 to 27
        Second => "2",
        /// Weeks 28 onward
        Third => "3",
    }
}

choice_enum! {
    /// Day-to-day physical activity
    ActivityLevel {
        /// Mostly seated
        Sedentary => "Sedentary",
        /// Light walking or chores
        Light => "Light",
        /// Regular moderate exercise
        Moderate => "Moderate",
        /// Daily vigorous activity
        Active => "Active",
    }
}

choice_enum! {
    /// How the baby was delivered
    DeliveryType {
        /// Vaginal delivery
        Normal => "Normal",
        /// Caesarean section
        CSection => "C-Section",
        /// Forceps or vacuum assisted
        Assisted => "Assisted",
    }
}

choice_enum! {
    /// Breastfeeding status
    FeedingStatus {
        /// Breast milk only
        Exclusive => "Exclusive",
        /// Breast milk and formula
        Partial => "Partial",
        /// Formula only
        FormulaFed => "Formula-fed",
    }
}

choice_enum! {
    /// Perceived milk supply
    SupplyLevel {
        /// Below the baby's demand
        Low => "Low",
        /// Matches demand
        Normal => "Normal",
        /// Above demand
        OverSupply => "Over-supply",
    }
}

choice_enum! {
    /// Self-reported energy
    EnergyLevel {
        /// Frequently tired
        Low => "Low",
        /// Usual energy
        Normal => "Normal",
        /// Energetic
        High => "High",
    }
}

/// Daily water intake in glasses, always within the slider's range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct WaterIntake(u8);

impl WaterIntake {
    /// Lowest reachable value
    pub const MIN: Self = Self(WATER_INTAKE_MIN);
    /// Highest reachable value
    pub const MAX: Self = Self(WATER_INTAKE_MAX);

    /// Build from any integer, clamping into the slider range
    #[must_use]
    pub fn clamped(glasses: i64) -> Self {
        let bounded = glasses.clamp(i64::from(WATER_INTAKE_MIN), i64::from(WATER_INTAKE_MAX));
        Self(u8::try_from(bounded).unwrap_or(WATER_INTAKE_DEFAULT))
    }

    /// Glasses per day
    #[must_use]
    pub const fn glasses(self) -> u8 {
        self.0
    }
}

impl Default for WaterIntake {
    fn default() -> Self {
        Self(WATER_INTAKE_DEFAULT)
    }
}

impl From<i64> for WaterIntake {
    fn from(glasses: i64) -> Self {
        Self::clamped(glasses)
    }
}

impl From<WaterIntake> for u8 {
    fn from(water: WaterIntake) -> Self {
        water.0
    }
}

impl fmt::Display for WaterIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WaterIntake {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self::clamped)
            .map_err(|e| {
                AppError::invalid_input(format!("water intake '{s}' is not a whole number"))
                    .with_source(e)
            })
    }
}
