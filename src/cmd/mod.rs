pub mod evaluate;
pub mod search;
