pub mod aggregator;
pub mod bulk;
pub mod client;
pub mod form;
pub mod formatter;
pub mod log;
pub mod report;
pub mod unmarked;
