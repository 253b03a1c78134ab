pub mod collection;
pub mod entities;
pub mod raw;
