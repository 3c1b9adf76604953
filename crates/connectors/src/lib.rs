pub mod sink;
pub mod source;
pub mod store;
pub mod transform;
