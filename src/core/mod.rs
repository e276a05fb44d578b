pub mod estimator;
pub mod survey;
pub mod table;
