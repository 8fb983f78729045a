//! Planetary orbit milestones.
//!
//! For a body with orbital period `P` days and a reference date `r`, the
//! milestone after `N` elapsed days is orbit number `floor(N / P) + 1`,
//! falling on `r + round((floor(N / P) + 1) * P)`.
//!
//! This is closed-form arithmetic; no sequence is searched.
//!
//! ```
//! use carpe_orbit::find_body;
//! use chrono::NaiveDate;
//!
//! let reference = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
//! let today = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
//!
//! let orbit = find_body("Mercury").unwrap().next_orbit(reference, today).unwrap();
//! assert_eq!(orbit.ordinal(), 181);
//! assert_eq!(orbit.days_to_go(), 52);
//! ```

mod body;
mod orbit;

pub use body::{BODIES, Body, find_body};
pub use orbit::{Orbit, orbits_completed};
