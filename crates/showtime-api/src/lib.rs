//! API client library for showtime.
//!
//! Fetches the content collections (movies, events, plays, sports,
//! activities, offers) served by the booking backend.

/// Booking backend catalog client.
pub mod catalog;
