mod common;
mod export;
mod registry;
