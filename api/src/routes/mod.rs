pub mod explain;
pub mod health;
