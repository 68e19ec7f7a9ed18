//! Endpoint implementations for [`ValorantClient`](super::ValorantClient).

mod account;
mod matches;
