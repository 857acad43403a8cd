pub mod best;
pub mod cancellation;
pub mod catalog;
pub mod count_vector;
pub mod dynamic;
pub mod exhaustive;
pub mod input;
pub mod parallel;
pub mod project;
pub mod search_error;
pub mod search_result;
pub mod sequence;
pub mod strategy;
