//! # Addrbook Architecture
//!
//! Addrbook is a small **UI-agnostic contact library**: named contacts, each
//! with a list of phone numbers, held in memory. The `addrbook` binary is just
//! one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, prints results, sets the exit code     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - AddressBookApi: one method per operation                 │
//! │  - Applies the configured phone check                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Operation logic, returns Result<CmdResult>               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (model.rs, book.rs)                                 │
//! │  - Phone, Record, AddressBook and their invariants          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Failures come back as [`error::AddrBookError`]; diagnostics go through
//! `tracing` and are only shown if the client installs a subscriber.
//!
//! ## Invariants
//!
//! - A record never holds the same phone twice.
//! - A book never holds two records with the same name.
//! - Every stored phone passed the record's [`model::PhoneCheck`] when it was added.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`book`]: The name-keyed [`book::AddressBook`]
//! - [`model`]: [`model::Phone`], [`model::Record`], [`model::PhoneCheck`]
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
