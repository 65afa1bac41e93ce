pub mod criteria;
pub mod evaluate;
pub mod matching;
