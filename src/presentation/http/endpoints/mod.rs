pub mod root;
pub mod system;
pub mod users;
