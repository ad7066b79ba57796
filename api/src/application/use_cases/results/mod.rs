pub mod calculate_result;
pub mod list_results;
