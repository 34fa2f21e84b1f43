pub mod date;
pub mod lead;
pub mod trend;
