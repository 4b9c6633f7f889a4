// Example records loaded at startup

use crate::fruit::Fruit;

/// The fixed set of example fruits
pub fn example_fruits() -> Vec<Fruit> {
    vec![
        Fruit::new("Apple", 150, "Red", true, 52),
        Fruit::new("Avocado", 200, "Green", true, 160),
        Fruit::new("Strawberry", 15, "Red", true, 32),
        Fruit::new("Watermelon", 4000, "Green", true, 30),
        Fruit::new("Kiwi", 70, "Brown", true, 61),
    ]
}
