//! Maritime route planner.
//!
//! Finds the cheapest or quickest way between ports over a network of
//! weekly-recurring sailings, and plans journeys through several ports in
//! order.

pub mod domain;
pub mod loader;
pub mod network;
pub mod planner;
pub mod web;
