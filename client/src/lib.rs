//! Async data client for the clash battle tool server.
//!
//! Fetches creature data from PokeAPI and converts it into the
//! [`PokemonData`](clash_protocol::PokemonData) wire records consumed by
//! `clash-battle`. Results are cached per identifier for the life of the
//! client.

mod api;
mod cache;
mod client;
mod config;
mod error;
mod normalize;

pub use client::DexClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use normalize::normalize_identifier;

pub use clash_protocol::{MoveData, PokemonData, StatBlock};
