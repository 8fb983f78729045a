//! Milestone engine.
//!
//! Combines the seven sequence generators of `carpe-sequence` with the eight
//! orbital generators of `carpe-orbit` into one ordered list of
//! [`Milestone`] records for a reference date.
//!
//! # Quick start
//!
//! ```
//! use carpe_engine::{Category, Engine};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
//! let birthday = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
//!
//! let result = Engine::new(today).compute(birthday).unwrap();
//! assert_eq!(result.elapsed_days(), 15871);
//!
//! let square = result.get("Square").unwrap();
//! assert_eq!(square.category, Category::Mathematical);
//! assert_eq!((square.ordinal, square.days_to_go), (126, 5));
//! ```
//!
//! # Architecture
//!
//! ```text
//! Engine::compute(reference)
//!   ├─ check year range            (config.rs)
//!   ├─ elapsed_days(reference, today)
//!   ├─ Generator::all()            (generator.rs)
//!   │    ├─ Sequence::next_after(elapsed) -> today + (value - elapsed)
//!   │    └─ Body::next_orbit(reference, today)
//!   ├─ split into milestones / skipped   (milestone.rs)
//!   └─ nothing representable -> EngineError::InvalidReferenceDate
//! ```
//!
//! With [`EngineConfig::with_parallel`] the generators run on the rayon pool;
//! output order is the same either way.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod milestone;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use generator::Generator;
pub use milestone::{Category, Milestone, Milestones, SkipReason, Skipped};
