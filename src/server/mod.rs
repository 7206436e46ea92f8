// HTTP hosting layer — JSON API over the per-variant cipher engines.

pub mod handler;

pub use handler::{GameServer, VariantMap};
