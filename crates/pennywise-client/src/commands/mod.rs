pub mod add;
pub mod categories;
pub mod chart;
pub mod list;
pub mod report;
