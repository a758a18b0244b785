//! Semantle — a word-guessing game scored by semantic similarity.
//!
//! Players try to find a hidden target word. Each guess is embedded through a
//! remote inference API and scored by cosine similarity against the target's
//! embedding; guesses are ranked within the session so players can see how
//! close they are getting.
//!
//! # Architecture
//!
//! - **Embeddings**: Hugging Face Inference API, L2-normalized and cached per text
//! - **Words**: date-hashed daily word or uniform random pick per difficulty
//! - **Sessions**: in-memory only, one writer at a time per session
//! - **Transport**: JSON over HTTP via axum
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`embedding`] — Embedding provider trait, HTTP provider, and caching gateway
//! - [`words`] — Target-word selection
//! - [`game`] — Sessions, ranking, session store, and the game engine
//! - [`api`] — HTTP routes and wire types
//! - [`server`] — State wiring and the HTTP listener

pub mod api;
pub mod config;
pub mod embedding;
pub mod game;
pub mod server;
pub mod words;
