mod use_games;
mod use_services;

pub use use_games::use_games;
pub use use_services::{use_services, ServiceContext};
