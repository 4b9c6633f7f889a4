// FruitStore - In-memory fruit record management

pub mod compare;
pub mod config;
pub mod field;
pub mod fruit;
pub mod manager;
pub mod report;
pub mod seed;
pub mod shell;
pub mod stats;

// Re-export main types for convenience
pub use compare::Comparison;
pub use config::Config;
pub use field::{FieldKind, FieldUpdate, FieldValue};
pub use fruit::Fruit;
pub use manager::FruitManager;
pub use seed::example_fruits;
pub use shell::Shell;
pub use stats::Statistics;
