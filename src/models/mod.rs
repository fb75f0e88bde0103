pub mod attempt;
pub mod edition;
pub mod question;
pub mod result_entry;
