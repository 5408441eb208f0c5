pub mod config;
pub mod constants;
pub mod dict_parser;
pub mod error;
pub mod geo;
pub mod hours;
pub mod logging;
pub mod pipeline;
pub mod spiders;
pub mod types;
