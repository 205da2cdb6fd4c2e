//! This crate is the date-computation core of a personal productivity widget (a
//! task tracker with a calendar view, a per-day notepad and a clock).
//!
//! The widget seeds its task list with a set of read-only holiday entries. Their
//! dates are the only algorithmically interesting part of the whole program, so
//! this is what lives here: the [`holiday`] module computes, for any year, the
//! full set of civil and religious/cultural holiday records (weekday rules, the
//! Easter computus and its offsets, and per-year lookup tables for the lunisolar
//! holidays).
//!
//! The computation is pure and stateless. The UI, the persistence layer and the
//! task CRUD are collaborators that consume these records; they only need
//! [`merge_holidays`] to seed their task list without ever duplicating an entry.

pub mod holiday;
pub use holiday::HolidayRecord;
pub use holiday::{holidays_for_year, holidays_for_years, merge_holidays};
