pub mod cursor;
pub mod event;
pub mod report;
pub mod row;
