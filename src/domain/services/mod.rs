pub mod calendar;
pub mod interaction;
pub mod layout;
pub mod matcher;
pub mod merger;
pub mod windowing;
