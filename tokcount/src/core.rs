// src/core.rs
pub mod collector;
pub mod config;
pub mod pipeline;
pub mod tokenizer;
