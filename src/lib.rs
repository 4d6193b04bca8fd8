pub mod logic;
pub mod session;
