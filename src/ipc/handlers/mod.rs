pub mod applications;
pub mod contacts;
pub mod core;
pub mod dashboard;
pub mod diary;
pub mod schedule;
