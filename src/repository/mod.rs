pub mod state;
pub mod table;
