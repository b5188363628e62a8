pub mod activity;
pub mod discrepancy;
pub mod medication;
pub mod mood;
pub mod sleep;
