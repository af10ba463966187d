//! Entity model definitions.

pub mod board;
pub mod card;
pub mod list;
pub mod member;
pub mod token;
pub mod webhook;
