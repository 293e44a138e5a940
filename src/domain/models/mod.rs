pub mod availability;
pub mod display;
pub mod intent;
pub mod interval;
pub mod rows;
pub mod session;
pub mod teacher;
