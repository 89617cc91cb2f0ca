pub mod clock;
pub mod config;
pub mod entity;
pub mod error;
pub mod food;
pub mod frontend;
pub mod game;
pub mod grid;
pub mod input;
pub mod mode;
pub mod rules;
pub mod snake;
pub mod term;
pub mod wall;
pub mod world;

pub type TermInt = u16;
