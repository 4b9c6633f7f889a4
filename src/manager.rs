// In-memory fruit record manager

use crate::compare::Comparison;
use crate::field::{FieldKind, FieldUpdate, FieldValue};
use crate::fruit::Fruit;
use crate::stats::Statistics;
use tracing::{debug, warn};

/// Owns the fruit collection and is its only mutator
///
/// Records are kept in insertion order. Expected failures (missing record,
/// duplicate name, unknown field) come back as `false` or `None`.
#[derive(Debug, Default)]
pub struct FruitManager {
    fruits: Vec<Fruit>,
}

impl FruitManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager holding the given records in order
    pub fn with_fruits<I: IntoIterator<Item = Fruit>>(fruits: I) -> Self {
        let mut manager = Self::new();
        for fruit in fruits {
            manager.add(fruit);
        }
        manager
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Case-insensitive exact name match
    pub fn exists(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.fruits.iter().any(|f| f.name().to_lowercase() == needle)
    }

    /// Snapshot of all records in insertion order
    pub fn all(&self) -> Vec<Fruit> {
        self.fruits.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    /// First record whose name contains `name`, ignoring case
    pub fn find_by_name_substring(&self, name: &str) -> Option<&Fruit> {
        let needle = name.to_lowercase();
        self.fruits.iter().find(|f| f.name().to_lowercase().contains(&needle))
    }

    /// First record whose name equals `name` exactly
    pub fn find_by_exact_name(&self, name: &str) -> Option<&Fruit> {
        self.fruits.iter().find(|f| f.name() == name)
    }

    /// Index of the first record named exactly `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fruits.iter().position(|f| f.name() == name)
    }

    /// Record at an insertion index
    pub fn get(&self, index: usize) -> Option<&Fruit> {
        self.fruits.get(index)
    }

    pub fn names(&self) -> Vec<String> {
        self.fruits.iter().map(|f| f.name().to_string()).collect()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::compute(&self.fruits)
    }

    /// Compare two records looked up by exact name
    ///
    /// Returns None if either name is missing.
    pub fn compare(&self, first: &str, second: &str) -> Option<Comparison> {
        let a = self.find_by_exact_name(first)?;
        let b = self.find_by_exact_name(second)?;
        Some(Comparison::between(a, b))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a record. Duplicate names are allowed.
    pub fn add(&mut self, fruit: Fruit) {
        debug!(name = fruit.name(), index = self.fruits.len(), "add: appending fruit");
        self.fruits.push(fruit);
    }

    /// Remove the first record with exactly this name
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.fruits.remove(index);
                debug!(name, index, "remove: fruit removed");
                true
            }
            None => {
                debug!(name, "remove: no such fruit");
                false
            }
        }
    }

    /// Overwrite every attribute of the record named `old_name`
    ///
    /// Fails without touching anything if `old_name` is absent, or if the
    /// name is changing and `new_name` is already taken (ignoring case).
    pub fn update_all(
        &mut self,
        old_name: &str,
        new_name: &str,
        weight: i32,
        color: &str,
        edible: bool,
        calories_per_100g: i32,
    ) -> bool {
        let Some(index) = self.position(old_name) else {
            debug!(old_name, "update_all: no such fruit");
            return false;
        };

        if self.name_taken(index, old_name, new_name) {
            debug!(old_name, new_name, "update_all: name already in use");
            return false;
        }

        self.fruits[index] = Fruit::new(new_name, weight, color, edible, calories_per_100g);
        debug!(old_name, new_name, "update_all: fruit updated");
        true
    }

    /// Update one attribute named by an identifier such as `"weight"`
    ///
    /// Unknown identifiers and values of the wrong type both yield `false`.
    pub fn update_field(&mut self, name: &str, kind: &str, value: FieldValue) -> bool {
        let Some(kind) = FieldKind::parse(kind) else {
            debug!(name, kind, "update_field: unknown field");
            return false;
        };

        match FieldUpdate::new(kind, value) {
            Some(update) => self.apply(name, update),
            None => {
                warn!(name, %kind, "update_field: value has the wrong type for field");
                false
            }
        }
    }

    /// Apply a typed single-field update to the record named `name`
    pub fn apply(&mut self, name: &str, update: FieldUpdate) -> bool {
        let Some(index) = self.position(name) else {
            debug!(name, "apply: no such fruit");
            return false;
        };

        if let FieldUpdate::Name(new_name) = &update {
            if self.name_taken(index, name, new_name) {
                debug!(name, new_name = new_name.as_str(), "apply: name already in use");
                return false;
            }
        }

        let kind = update.kind();
        update.apply_to(&mut self.fruits[index]);
        debug!(name, %kind, "apply: field updated");
        true
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    /// A rename collides when the name changes and a record other than the
    /// one at `index` already uses it, ignoring case
    fn name_taken(&self, index: usize, old_name: &str, new_name: &str) -> bool {
        if old_name == new_name {
            return false;
        }
        let needle = new_name.to_lowercase();
        self.fruits
            .iter()
            .enumerate()
            .any(|(i, f)| i != index && f.name().to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::example_fruits;

    fn seeded() -> FruitManager {
        FruitManager::with_fruits(example_fruits())
    }

    #[test]
    fn test_new_is_empty() {
        let manager = FruitManager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert!(manager.names().is_empty());
    }

    #[test]
    fn test_add_and_exists_any_case() {
        let mut manager = FruitManager::new();
        manager.add(Fruit::new("Mango", 200, "Orange", true, 60));

        assert!(manager.exists("Mango"));
        assert!(manager.exists("mango"));
        assert!(manager.exists("MANGO"));
        assert!(!manager.exists("Mang"));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_add_allows_duplicates_and_substring_finds_first() {
        let mut manager = FruitManager::new();
        manager.add(Fruit::new("A", 10, "x", true, 10));
        manager.add(Fruit::new("A", 20, "y", true, 20));

        assert_eq!(manager.len(), 2);
        let found = manager.find_by_name_substring("a").unwrap();
        assert_eq!(found, &Fruit::new("A", 10, "x", true, 10));
    }

    #[test]
    fn test_all_returns_snapshot() {
        let manager = seeded();
        let mut snapshot = manager.all();
        snapshot.clear();

        assert_eq!(manager.len(), 5);
        assert_eq!(manager.all(), example_fruits());
    }

    #[test]
    fn test_find_by_name_substring() {
        let manager = seeded();
        assert_eq!(manager.find_by_name_substring("berry").map(Fruit::name), Some("Strawberry"));
        assert_eq!(manager.find_by_name_substring("MELON").map(Fruit::name), Some("Watermelon"));
        // "a" appears in Apple first
        assert_eq!(manager.find_by_name_substring("a").map(Fruit::name), Some("Apple"));
        assert!(manager.find_by_name_substring("banana").is_none());
    }

    #[test]
    fn test_find_by_exact_name_is_case_sensitive() {
        let manager = seeded();
        assert_eq!(manager.find_by_exact_name("Kiwi").map(Fruit::weight), Some(70));
        assert!(manager.find_by_exact_name("kiwi").is_none());
        assert!(manager.find_by_exact_name("Kiw").is_none());
    }

    #[test]
    fn test_names_in_order() {
        let manager = seeded();
        assert_eq!(
            manager.names(),
            vec!["Apple", "Avocado", "Strawberry", "Watermelon", "Kiwi"]
        );
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut manager = FruitManager::new();
        manager.add(Fruit::new("Fig", 10, "Purple", true, 74));
        manager.add(Fruit::new("Lime", 40, "Green", true, 30));
        manager.add(Fruit::new("Fig", 20, "Black", true, 74));

        assert!(manager.remove("Fig"));
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.find_by_exact_name("Fig").map(Fruit::color), Some("Black"));
        assert_eq!(manager.names(), vec!["Lime", "Fig"]);
    }

    #[test]
    fn test_remove_missing_leaves_collection_alone() {
        let mut manager = seeded();
        assert!(!manager.remove("Banana"));
        assert!(!manager.remove("apple"));
        assert_eq!(manager.all(), example_fruits());
    }

    #[test]
    fn test_update_all() {
        let mut manager = seeded();
        assert!(manager.update_all("Kiwi", "Golden Kiwi", 80, "Yellow", true, 63));

        assert!(manager.find_by_exact_name("Kiwi").is_none());
        assert_eq!(
            manager.find_by_exact_name("Golden Kiwi"),
            Some(&Fruit::new("Golden Kiwi", 80, "Yellow", true, 63))
        );
        // position is kept
        assert_eq!(manager.names()[4], "Golden Kiwi");
    }

    #[test]
    fn test_update_all_keeping_name() {
        let mut manager = seeded();
        assert!(manager.update_all("Apple", "Apple", 170, "Green", false, 50));
        assert_eq!(
            manager.find_by_exact_name("Apple"),
            Some(&Fruit::new("Apple", 170, "Green", false, 50))
        );
    }

    #[test]
    fn test_update_all_missing() {
        let mut manager = seeded();
        assert!(!manager.update_all("Banana", "Plantain", 100, "Yellow", true, 89));
        assert_eq!(manager.all(), example_fruits());
    }

    #[test]
    fn test_update_all_rejects_taken_name() {
        let mut manager = seeded();
        assert!(!manager.update_all("Kiwi", "apple", 80, "Yellow", true, 63));
        assert_eq!(manager.find_by_exact_name("Kiwi"), Some(&Fruit::new("Kiwi", 70, "Brown", true, 61)));
        assert_eq!(manager.all(), example_fruits());
    }

    #[test]
    fn test_update_all_case_only_rename() {
        let mut manager = seeded();
        assert!(manager.update_all("Kiwi", "KIWI", 70, "Brown", true, 61));
        assert_eq!(manager.names()[4], "KIWI");
        assert!(manager.find_by_exact_name("Kiwi").is_none());
        assert_eq!(manager.len(), 5);
    }

    #[test]
    fn test_update_all_case_only_rename_blocked_by_duplicate() {
        let mut manager = FruitManager::new();
        manager.add(Fruit::new("Fig", 10, "Purple", true, 74));
        manager.add(Fruit::new("Fig", 20, "Black", true, 74));

        // the second "Fig" is another record holding the name
        assert!(!manager.update_all("Fig", "FIG", 10, "Purple", true, 74));
        assert_eq!(manager.names(), vec!["Fig", "Fig"]);
    }

    #[test]
    fn test_update_field_weight() {
        let mut manager = seeded();
        assert!(manager.update_field("Apple", "weight", FieldValue::Int(999)));
        assert_eq!(
            manager.find_by_exact_name("Apple"),
            Some(&Fruit::new("Apple", 999, "Red", true, 52))
        );
    }

    #[test]
    fn test_update_field_missing_record() {
        let mut manager = seeded();
        assert!(!manager.update_field("Banana", "weight", FieldValue::Int(999)));
        assert_eq!(manager.all(), example_fruits());
    }

    #[test]
    fn test_update_field_unknown_kind() {
        let mut manager = seeded();
        assert!(!manager.update_field("Apple", "sweetness", FieldValue::Int(5)));
        assert_eq!(manager.all(), example_fruits());
    }

    #[test]
    fn test_update_field_wrong_value_type() {
        let mut manager = seeded();
        assert!(!manager.update_field("Apple", "weight", FieldValue::Text("heavy".to_string())));
        assert_eq!(manager.all(), example_fruits());
    }

    #[test]
    fn test_update_field_name_guard() {
        let mut manager = seeded();
        assert!(!manager.update_field("Apple", "name", FieldValue::Text("KIWI".to_string())));
        assert!(manager.find_by_exact_name("Apple").is_some());

        // renaming to itself is not a conflict
        assert!(manager.update_field("Apple", "name", FieldValue::Text("Apple".to_string())));
        assert!(manager.update_field("Apple", "name", FieldValue::Text("Crabapple".to_string())));
        assert_eq!(manager.names()[0], "Crabapple");
    }

    #[test]
    fn test_update_field_case_only_rename() {
        let mut manager = seeded();
        assert!(manager.update_field("Apple", "name", FieldValue::Text("APPLE".to_string())));
        assert_eq!(
            manager.find_by_exact_name("APPLE"),
            Some(&Fruit::new("APPLE", 150, "Red", true, 52))
        );
        assert_eq!(manager.names()[0], "APPLE");
    }

    #[test]
    fn test_apply_each_kind() {
        let mut manager = seeded();
        assert!(manager.apply("Kiwi", FieldUpdate::Color("Green".to_string())));
        assert!(manager.apply("Kiwi", FieldUpdate::Edible(false)));
        assert!(manager.apply("Kiwi", FieldUpdate::Calories(58)));
        assert!(manager.apply("Kiwi", FieldUpdate::Weight(75)));

        assert_eq!(
            manager.find_by_exact_name("Kiwi"),
            Some(&Fruit::new("Kiwi", 75, "Green", false, 58))
        );
    }

    #[test]
    fn test_statistics_empty() {
        let stats = FruitManager::new().statistics();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.healthy_percentage, 0.0);
        assert!(stats.heaviest.is_none());
    }

    #[test]
    fn test_statistics_end_to_end() {
        let mut manager = FruitManager::new();
        manager.add(Fruit::new("A", 100, "Red", true, 50));
        manager.add(Fruit::new("B", 50, "Green", true, 70));

        let stats = manager.statistics();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.healthy, 1);
        assert_eq!(stats.edible, 2);
        assert_eq!(stats.average_calories_per_100g, 60.0);
        assert_eq!(stats.heaviest.as_ref().map(Fruit::name), Some("A"));
    }

    #[test]
    fn test_statistics_seeded() {
        let stats = seeded().statistics();
        assert_eq!(stats.total, 5);
        // Apple, Strawberry, Watermelon
        assert_eq!(stats.healthy, 3);
        assert_eq!(stats.healthy_percentage, 60.0);
        assert_eq!(stats.edible, 5);
        assert_eq!(stats.average_calories_per_100g, 67.0);
        assert_eq!(stats.heaviest.as_ref().map(Fruit::name), Some("Watermelon"));
    }

    #[test]
    fn test_statistics_heaviest_is_a_copy() {
        let mut manager = seeded();
        let stats = manager.statistics();
        assert!(manager.remove("Watermelon"));
        assert_eq!(stats.heaviest.as_ref().map(Fruit::weight), Some(4000));
    }

    #[test]
    fn test_compare() {
        let manager = seeded();
        let cmp = manager.compare("Apple", "Kiwi").unwrap();
        assert_eq!(cmp.first, "Apple");
        assert_eq!(cmp.weight, crate::compare::WeightOutcome::FirstHeavier);

        assert!(manager.compare("Apple", "Banana").is_none());
        assert!(manager.compare("apple", "Kiwi").is_none());
    }
}
