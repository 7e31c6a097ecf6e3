#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod analysis;
mod balance;
pub mod catalog;
mod config;
mod error;
mod exercise;
mod generator;
mod model;
mod name;
mod service;
mod template;
mod training;
mod user;
mod volume;

pub use analysis::*;
pub use balance::*;
pub use catalog::Catalog;
pub use config::*;
pub use error::*;
pub use exercise::*;
pub use generator::*;
pub use model::*;
pub use name::*;
pub use service::*;
pub use template::*;
pub use training::*;
pub use user::*;
pub use volume::*;
