//! Postgres access for the simple-admin workspace: schema, models, pool,
//! and user queries.

pub mod db;
pub mod error;
pub mod model;
