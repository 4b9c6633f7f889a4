// Aggregate statistics over a set of fruit records

use crate::fruit::Fruit;
use serde::Serialize;
use std::fmt;

/// Snapshot of the collection at the moment it was computed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub healthy: usize,
    pub edible: usize,
    pub healthy_percentage: f64,
    pub edible_percentage: f64,
    pub average_calories_per_100g: f64,
    /// First record with the greatest weight, None when empty
    pub heaviest: Option<Fruit>,
}

impl Statistics {
    /// Compute over records in stored order. Weight ties keep the earlier record.
    pub fn compute(fruits: &[Fruit]) -> Self {
        let Some(first) = fruits.first() else {
            return Self::default();
        };

        let mut healthy = 0;
        let mut edible = 0;
        let mut calories_sum: i64 = 0;
        let mut heaviest = first;

        for fruit in fruits {
            if fruit.is_healthy() {
                healthy += 1;
            }
            if fruit.can_be_eaten() {
                edible += 1;
            }
            calories_sum += i64::from(fruit.calories_per_100g());
            if fruit.is_heavier_than(heaviest) {
                heaviest = fruit;
            }
        }

        let total = fruits.len();
        Self {
            total,
            healthy,
            edible,
            healthy_percentage: percentage(healthy, total),
            edible_percentage: percentage(edible, total),
            average_calories_per_100g: calories_sum as f64 / total as f64,
            heaviest: Some(heaviest.clone()),
        }
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GENERAL STATISTICS")?;
        writeln!(f)?;
        writeln!(f, "Total fruits: {}", self.total)?;
        writeln!(f, "Healthy fruits: {} ({:.1}%)", self.healthy, self.healthy_percentage)?;
        writeln!(f, "Edible fruits: {} ({:.1}%)", self.edible, self.edible_percentage)?;
        if let Some(heaviest) = &self.heaviest {
            writeln!(f, "Heaviest fruit: {}", heaviest.name())?;
        }
        writeln!(f, "Average calories per 100g: {:.1}", self.average_calories_per_100g)
    }
}
