// ABOUTME: Ordered field descriptors for the pregnancy and postpartum forms
// ABOUTME: Names, labels and control kinds consumed by the HTML form renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::choices::{
    ActivityLevel, DeliveryType, DietPreference, EnergyLevel, FeedingStatus, SupplyLevel,
    Trimester,
};
use crate::constants::form::{WATER_INTAKE_DEFAULT, WATER_INTAKE_MAX, WATER_INTAKE_MIN};

/// The input control a field is collected with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    /// Free text, any string including empty
    Text,
    /// One of a fixed list of options; the first is preselected
    Select(&'static [&'static str]),
    /// Integer slider
    Slider {
        /// Lowest value
        min: u8,
        /// Highest value
        max: u8,
        /// Initial value
        default: u8,
    },
}

/// A labelled form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Submission key
    pub name: &'static str,
    /// Label shown next to the control
    pub label: &'static str,
    /// Control kind
    pub control: FieldControl,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, control: FieldControl) -> Self {
        Self {
            name,
            label,
            control,
        }
    }
}

const WATER_SLIDER: FieldControl = FieldControl::Slider {
    min: WATER_INTAKE_MIN,
    max: WATER_INTAKE_MAX,
    default: WATER_INTAKE_DEFAULT,
};

/// Pregnancy form, in display order
pub const PREGNANCY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("allergies", "Food allergies (if any)", FieldControl::Text),
    FieldSpec::new(
        "diet_type",
        "Dietary preference",
        FieldControl::Select(DietPreference::LABELS),
    ),
    FieldSpec::new(
        "intolerances",
        "Food intolerances (gluten, dairy, etc.)",
        FieldControl::Text,
    ),
    FieldSpec::new(
        "trimester",
        "Current trimester",
        FieldControl::Select(Trimester::LABELS),
    ),
    FieldSpec::new(
        "weight_before",
        "Weight before pregnancy (kg)",
        FieldControl::Text,
    ),
    FieldSpec::new("current_weight", "Current weight (kg)", FieldControl::Text),
    FieldSpec::new(
        "activity_level",
        "Activity level",
        FieldControl::Select(ActivityLevel::LABELS),
    ),
    FieldSpec::new("water_intake", "Water intake (glasses/day)", WATER_SLIDER),
    FieldSpec::new(
        "goal",
        "Primary goal (e.g., healthy baby, energy boost, etc.)",
        FieldControl::Text,
    ),
];

/// Postpartum form, in display order
pub const POSTPARTUM_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "delivery_type",
        "Delivery type",
        FieldControl::Select(DeliveryType::LABELS),
    ),
    FieldSpec::new(
        "breastfeeding",
        "Breastfeeding status",
        FieldControl::Select(FeedingStatus::LABELS),
    ),
    FieldSpec::new(
        "milk_supply",
        "Milk supply",
        FieldControl::Select(SupplyLevel::LABELS),
    ),
    FieldSpec::new(
        "diet_type",
        "Dietary preference",
        FieldControl::Select(DietPreference::LABELS),
    ),
    FieldSpec::new(
        "digestion_issues",
        "Digestive issues (gas, bloating, etc.)",
        FieldControl::Text,
    ),
    FieldSpec::new(
        "energy",
        "Energy level",
        FieldControl::Select(EnergyLevel::LABELS),
    ),
    FieldSpec::new("water_intake", "Water intake (glasses/day)", WATER_SLIDER),
    FieldSpec::new(
        "goal",
        "Primary goal (e.g., healing, weight loss, boost milk, etc.)",
        FieldControl::Text,
    ),
];
