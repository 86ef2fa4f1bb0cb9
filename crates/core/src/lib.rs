pub mod days;
pub mod errors;
pub mod models;
pub mod time;
pub mod wizard;
