pub mod guild;
pub mod scrim;
