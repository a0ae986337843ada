//! # src/models/mod.rs
//!
//! Bündelt die serialisierbaren Kern-Datenstrukturen des Marktplatzes:
//! Voucher, Listings, Settlement-Events und den Deployment-Record.

pub mod deployment;
pub mod event;
pub mod listing;
pub mod voucher;
