pub mod detail;
pub mod help;
pub mod overview;
