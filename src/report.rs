// Plain-text renderings of fruit records

use crate::fruit::{Fruit, yes_no};
use std::fmt::Write;

fn push_extras(out: &mut String, fruit: &Fruit, bullet: &str) {
    let _ = writeln!(out, "{}Calories per gram: {:.4}", bullet, fruit.calories_per_gram());
    let _ = writeln!(out, "{}Is healthy?: {}", bullet, yes_no(fruit.is_healthy()));
    let _ = writeln!(out, "{}Can be consumed?: {}", bullet, yes_no(fruit.can_be_eaten()));
}

/// Detailed view of a single record
pub fn details(fruit: &Fruit) -> String {
    let mut out = format!("{}\n\nAdditional information:\n", fruit);
    push_extras(&mut out, fruit, "• ");
    out
}

/// Numbered listing of every record
pub fn listing(fruits: &[Fruit]) -> String {
    let mut out = String::from("COMPLETE FRUIT LIST\n\n");
    for (i, fruit) in fruits.iter().enumerate() {
        let _ = writeln!(out, "FRUIT {}:", i + 1);
        let _ = writeln!(out, "{}", fruit);
        push_extras(&mut out, fruit, "");
        out.push_str("-----------------------------\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details() {
        let text = details(&Fruit::new("Kiwi", 70, "Brown", true, 61));
        assert!(text.starts_with("Name: Kiwi, Color: Brown, Weight: 70g"));
        assert!(text.contains("Additional information:\n"));
        assert!(text.contains("• Calories per gram: 0.6100\n"));
        assert!(text.contains("• Is healthy?: No\n"));
        assert!(text.contains("• Can be consumed?: Yes\n"));
    }

    #[test]
    fn test_listing_numbers_in_order() {
        let fruits = vec![
            Fruit::new("Apple", 150, "Red", true, 52),
            Fruit::new("Kiwi", 70, "Brown", true, 61),
        ];
        let text = listing(&fruits);
        assert!(text.starts_with("COMPLETE FRUIT LIST\n\n"));

        let first = text.find("FRUIT 1:\nName: Apple").unwrap();
        let second = text.find("FRUIT 2:\nName: Kiwi").unwrap();
        assert!(first < second);
        assert_eq!(text.matches("-----------------------------\n").count(), 2);
    }

    #[test]
    fn test_listing_empty() {
        assert_eq!(listing(&[]), "COMPLETE FRUIT LIST\n\n");
    }
}
