//! Bounded-size tables for long yearly series
//!
//! Both the rent and mortgage tables go through the same [`compress`]
//! routine. A `max_rows` of zero disables compression.

mod compress;
mod rows;

pub use compress::{compress, group_ranges, series_total, year_range_label, YearlyRow};
pub use rows::{compact_mortgage_rows, compact_rent_rows, CompactMortgageRow, CompactRow};
