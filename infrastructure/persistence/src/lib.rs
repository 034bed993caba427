pub mod db;
mod errors;
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod membership {
    pub mod repository;
}
pub mod recipe {
    pub mod entity;
    pub mod repository;
}
