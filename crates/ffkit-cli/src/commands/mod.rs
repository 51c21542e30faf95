pub mod check;
pub mod dump;
