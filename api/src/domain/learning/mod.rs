pub mod catalog;
pub mod learning_type;
pub mod tally;
