pub mod detection_result;
pub mod feature_set;
pub mod issue_suggestion;
pub mod validation_result;
