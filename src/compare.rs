// Side-by-side comparison of two fruit records

use crate::fruit::Fruit;
use serde::Serialize;
use std::fmt;

/// Which of the two records is heavier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightOutcome {
    FirstHeavier,
    SecondHeavier,
    SameWeight,
}

/// Which of the two records satisfy a yes/no property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    Both,
    OnlyFirst,
    OnlySecond,
    Neither,
}

impl Pairing {
    fn of(first: bool, second: bool) -> Self {
        match (first, second) {
            (true, true) => Pairing::Both,
            (true, false) => Pairing::OnlyFirst,
            (false, true) => Pairing::OnlySecond,
            (false, false) => Pairing::Neither,
        }
    }
}

/// Result of comparing two records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub first: String,
    pub second: String,
    pub weight: WeightOutcome,
    pub healthy: Pairing,
    pub edible: Pairing,
}

impl Comparison {
    pub fn between(first: &Fruit, second: &Fruit) -> Self {
        let weight = if first.is_heavier_than(second) {
            WeightOutcome::FirstHeavier
        } else if second.is_heavier_than(first) {
            WeightOutcome::SecondHeavier
        } else {
            WeightOutcome::SameWeight
        };

        Self {
            first: first.name().to_string(),
            second: second.name().to_string(),
            weight,
            healthy: Pairing::of(first.is_healthy(), second.is_healthy()),
            edible: Pairing::of(first.can_be_eaten(), second.can_be_eaten()),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (&self.first, &self.second);

        writeln!(f, "FRUIT COMPARISON")?;
        writeln!(f)?;
        writeln!(f, "{} vs {}", a, b)?;
        writeln!(f)?;

        match self.weight {
            WeightOutcome::FirstHeavier => writeln!(f, "Weight: {} is heavier", a)?,
            WeightOutcome::SecondHeavier => writeln!(f, "Weight: {} is heavier", b)?,
            WeightOutcome::SameWeight => writeln!(f, "Weight: They have the same weight")?,
        }

        match self.healthy {
            Pairing::Both => writeln!(f, "Healthy: Both are healthy")?,
            Pairing::OnlyFirst => writeln!(f, "Healthy: {} is healthy", a)?,
            Pairing::OnlySecond => writeln!(f, "Healthy: {} is healthy", b)?,
            Pairing::Neither => writeln!(f, "Healthy: Neither is healthy")?,
        }

        match self.edible {
            Pairing::Both => write!(f, "Edible: Both are edible"),
            Pairing::OnlyFirst => write!(f, "Edible: Only {} is edible", a),
            Pairing::OnlySecond => write!(f, "Edible: Only {} is edible", b),
            Pairing::Neither => write!(f, "Edible: Neither is edible"),
        }
    }
}
