pub mod aggregate;
pub mod history;
pub mod report;
