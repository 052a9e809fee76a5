//! E2E tests: spawn the server on 127.0.0.1:0 and drive it over HTTP.

mod common;
mod generate;
mod health;
mod invalid_json;
