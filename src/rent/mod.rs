//! Rent projection: compound growth of a base monthly rent over an analysis horizon

mod projection;

pub use projection::{MAX_ANALYSIS_YEARS, rent_for_year, project_rent, try_project_rent, YearData, MonthlyRentData};
