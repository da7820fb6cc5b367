pub mod game;
pub mod scorer;
pub mod snapshot;
pub mod standings;
pub mod team;
