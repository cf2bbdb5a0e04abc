pub mod index;
pub mod item;
pub mod matcher;
pub mod query;
pub mod reading;
pub mod script;
pub mod unicode;
pub mod variants;
