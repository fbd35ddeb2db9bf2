//! Service integration tests
//!
//! These run against a real Postgres database and are ignored by
//! default. Point DATABASE_URL at a disposable database first.

mod pricing_flow;
