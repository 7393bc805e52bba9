// ABOUTME: Input collection for the two planner stages (pregnancy and postpartum)
// ABOUTME: Turns submitted form values into a typed, request-scoped FormRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Input Collector
//!
//! The planner form has two mutually exclusive stages. Each stage exposes a
//! fixed, ordered set of fields ([`Stage::fields`]) and collects into its own
//! record type; [`FormRecord`] is the tagged union of the two.
//!
//! Collection never rejects free text. Missing text is the empty string,
//! missing selections take the control's initial option, and the water
//! intake is clamped into the slider range. The only failures are values no
//! form control could have produced, such as an unknown select option.

mod choices;
mod fields;

pub use choices::{
    ActivityLevel, DeliveryType, DietPreference, EnergyLevel, FeedingStatus, SupplyLevel,
    Trimester, WaterIntake,
};
pub use fields::{FieldControl, FieldSpec, POSTPARTUM_FIELDS, PREGNANCY_FIELDS};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::export::{POSTPARTUM_FILENAME, PREGNANCY_FILENAME};
use crate::errors::AppError;

/// Submission key carrying the selected stage
pub const STAGE_FIELD: &str = "stage";

/// Raw submitted values keyed by field name
pub type RawSubmission = HashMap<String, String>;

/// Which form is live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Expecting mothers
    #[default]
    Pregnancy,
    /// Mothers after delivery
    Postpartum,
}

impl Stage {
    /// Both stages, in the order the selector shows them
    pub const ALL: [Self; 2] = [Self::Pregnancy, Self::Postpartum];

    /// Stable identifier used in URLs and JSON
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pregnancy => "pregnancy",
            Self::Postpartum => "postpartum",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pregnancy => "Pregnancy",
            Self::Postpartum => "Postpartum",
        }
    }

    /// Fields collected for this stage, in display order
    #[must_use]
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Pregnancy => PREGNANCY_FIELDS,
            Self::Postpartum => POSTPARTUM_FIELDS,
        }
    }

    /// Name offered for the downloaded plan
    #[must_use]
    pub const fn document_filename(self) -> &'static str {
        match self {
            Self::Pregnancy => PREGNANCY_FILENAME,
            Self::Postpartum => POSTPARTUM_FILENAME,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pregnancy" => Ok(Self::Pregnancy),
            "postpartum" => Ok(Self::Postpartum),
            other => Err(AppError::invalid_input(format!(
                "'{other}' is not a planner stage"
            ))),
        }
    }
}

/// Pregnancy form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PregnancyRecord {
    /// Food allergies, free text
    pub allergies: String,
    /// Dietary preference
    pub diet_type: DietPreference,
    /// Food intolerances, free text
    pub intolerances: String,
    /// Current trimester
    pub trimester: Trimester,
    /// Weight before pregnancy, free text (kg)
    pub weight_before: String,
    /// Current weight, free text (kg)
    pub current_weight: String,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Glasses of water per day
    pub water_intake: WaterIntake,
    /// Primary goal, free text
    pub goal: String,
}

/// Postpartum form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostpartumRecord {
    /// Delivery type
    pub delivery_type: DeliveryType,
    /// Breastfeeding status
    pub breastfeeding: FeedingStatus,
    /// Milk supply
    pub milk_supply: SupplyLevel,
    /// Dietary preference
    pub diet_type: DietPreference,
    /// Digestive issues, free text
    pub digestion_issues: String,
    /// Energy level
    pub energy: EnergyLevel,
    /// Glasses of water per day
    pub water_intake: WaterIntake,
    /// Primary goal, free text
    pub goal: String,
}

/// Snapshot of the live form at generation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum FormRecord {
    /// Pregnancy stage values
    Pregnancy(PregnancyRecord),
    /// Postpartum stage values
    Postpartum(PostpartumRecord),
}

impl FormRecord {
    /// Record holding every control's initial value
    #[must_use]
    pub fn initial(stage: Stage) -> Self {
        match stage {
            Stage::Pregnancy => Self::Pregnancy(PregnancyRecord::default()),
            Stage::Postpartum => Self::Postpartum(PostpartumRecord::default()),
        }
    }

    /// Stage this record was collected for
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Pregnancy(_) => Stage::Pregnancy,
            Self::Postpartum(_) => Stage::Postpartum,
        }
    }

    /// Water intake, present in both stages
    #[must_use]
    pub const fn water_intake(&self) -> WaterIntake {
        match self {
            Self::Pregnancy(record) => record.water_intake,
            Self::Postpartum(record) => record.water_intake,
        }
    }

    /// Diet preference, present in both stages
    #[must_use]
    pub const fn diet_type(&self) -> DietPreference {
        match self {
            Self::Pregnancy(record) => record.diet_type,
            Self::Postpartum(record) => record.diet_type,
        }
    }

    /// Collect a record from submitted values, reading the stage from the
    /// `stage` key (pregnancy when absent)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown stage, an unknown select option,
    /// or a water intake that is not a whole number.
    pub fn from_fields(fields: &RawSubmission) -> Result<Self, AppError> {
        let stage = match non_blank(fields, STAGE_FIELD) {
            Some(value) => value.parse()?,
            None => Stage::default(),
        };
        Self::from_submission(stage, fields)
    }

    /// Collect a record for `stage` from submitted values
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown select option or a water intake
    /// that is not a whole number.
    pub fn from_submission(stage: Stage, fields: &RawSubmission) -> Result<Self, AppError> {
        let record = match stage {
            Stage::Pregnancy => Self::Pregnancy(PregnancyRecord {
                allergies: text(fields, "allergies"),
                diet_type: choice(fields, "diet_type")?,
                intolerances: text(fields, "intolerances"),
                trimester: choice(fields, "trimester")?,
                weight_before: text(fields, "weight_before"),
                current_weight: text(fields, "current_weight"),
                activity_level: choice(fields, "activity_level")?,
                water_intake: choice(fields, "water_intake")?,
                goal: text(fields, "goal"),
            }),
            Stage::Postpartum => Self::Postpartum(PostpartumRecord {
                delivery_type: choice(fields, "delivery_type")?,
                breastfeeding: choice(fields, "breastfeeding")?,
                milk_supply: choice(fields, "milk_supply")?,
                diet_type: choice(fields, "diet_type")?,
                digestion_issues: text(fields, "digestion_issues"),
                energy: choice(fields, "energy")?,
                water_intake: choice(fields, "water_intake")?,
                goal: text(fields, "goal"),
            }),
        };
        Ok(record)
    }

    /// Field name and value pairs in form order
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Pregnancy(r) => vec![
                ("allergies", r.allergies.clone()),
                ("diet_type", r.diet_type.to_string()),
                ("intolerances", r.intolerances.clone()),
                ("trimester", r.trimester.to_string()),
                ("weight_before", r.weight_before.clone()),
                ("current_weight", r.current_weight.clone()),
                ("activity_level", r.activity_level.to_string()),
                ("water_intake", r.water_intake.to_string()),
                ("goal", r.goal.clone()),
            ],
            Self::Postpartum(r) => vec![
                ("delivery_type", r.delivery_type.to_string()),
                ("breastfeeding", r.breastfeeding.to_string()),
                ("milk_supply", r.milk_supply.to_string()),
                ("diet_type", r.diet_type.to_string()),
                ("digestion_issues", r.digestion_issues.clone()),
                ("energy", r.energy.to_string()),
                ("water_intake", r.water_intake.to_string()),
                ("goal", r.goal.clone()),
            ],
        }
    }

    /// Current value of a named field
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find_map(|(field, value)| (field == name).then_some(value))
    }
}

fn text(fields: &RawSubmission, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

fn non_blank<'a>(fields: &'a RawSubmission, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn choice<T>(fields: &RawSubmission, name: &str) -> Result<T, AppError>
where
    T: FromStr<Err = AppError> + Default,
{
    non_blank(fields, name).map_or_else(|| Ok(T::default()), str::parse)
}
