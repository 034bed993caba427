pub mod catalog;
pub mod error;
pub mod health;
pub mod membership;
pub mod recipe;
pub mod security;
pub mod shopping_list;
pub mod tags;
