// Single-attribute updates for fruit records

use crate::fruit::Fruit;
use eyre::{Result, eyre};
use std::fmt;
use std::str::FromStr;

/// Attribute of a fruit that can be updated on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Weight,
    Color,
    Edible,
    Calories,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Name,
        FieldKind::Weight,
        FieldKind::Color,
        FieldKind::Edible,
        FieldKind::Calories,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Weight => "weight",
            FieldKind::Color => "color",
            FieldKind::Edible => "edible",
            FieldKind::Calories => "calories",
        }
    }

    /// Parse an identifier, returning None for anything unrecognized
    pub fn parse(ident: &str) -> Option<Self> {
        match ident.trim().to_lowercase().as_str() {
            "name" => Some(FieldKind::Name),
            "weight" => Some(FieldKind::Weight),
            "color" => Some(FieldKind::Color),
            "edible" => Some(FieldKind::Edible),
            "calories" | "calories_per_100g" => Some(FieldKind::Calories),
            _ => None,
        }
    }
}

impl FromStr for FieldKind {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| eyre!("Unknown field: {} (expected one of name, weight, color, edible, calories)", s))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loosely typed value as collected from a caller
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i32),
    Bool(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A field kind paired with a value of the right type
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Weight(i32),
    Color(String),
    Edible(bool),
    Calories(i32),
}

impl FieldUpdate {
    /// Pair a kind with a value; None when the value has the wrong type
    pub fn new(kind: FieldKind, value: FieldValue) -> Option<Self> {
        match (kind, value) {
            (FieldKind::Name, FieldValue::Text(s)) => Some(FieldUpdate::Name(s)),
            (FieldKind::Weight, FieldValue::Int(i)) => Some(FieldUpdate::Weight(i)),
            (FieldKind::Color, FieldValue::Text(s)) => Some(FieldUpdate::Color(s)),
            (FieldKind::Edible, FieldValue::Bool(b)) => Some(FieldUpdate::Edible(b)),
            (FieldKind::Calories, FieldValue::Int(i)) => Some(FieldUpdate::Calories(i)),
            _ => None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldUpdate::Name(_) => FieldKind::Name,
            FieldUpdate::Weight(_) => FieldKind::Weight,
            FieldUpdate::Color(_) => FieldKind::Color,
            FieldUpdate::Edible(_) => FieldKind::Edible,
            FieldUpdate::Calories(_) => FieldKind::Calories,
        }
    }

    /// Overwrite the matching attribute. Name conflicts are the manager's concern.
    pub(crate) fn apply_to(self, fruit: &mut Fruit) {
        match self {
            FieldUpdate::Name(name) => fruit.set_name(name),
            FieldUpdate::Weight(weight) => fruit.set_weight(weight),
            FieldUpdate::Color(color) => fruit.set_color(color),
            FieldUpdate::Edible(edible) => fruit.set_edible(edible),
            FieldUpdate::Calories(calories) => fruit.set_calories_per_100g(calories),
        }
    }
}
