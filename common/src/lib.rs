pub mod constants;
pub mod maze;
pub mod player;
pub mod raycast;
pub mod view;
