//! REST API handlers for the documentation portal.

mod docs;
mod health;
mod multipart;
mod router;

#[cfg(test)]
mod tests;

pub use router::create_router;
