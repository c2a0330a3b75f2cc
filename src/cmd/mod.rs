pub mod interactive;
pub mod search;
