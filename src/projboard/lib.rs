//! # Projboard Architecture
//!
//! Projboard is a two-lane project board (Active / Finished) with a form for
//! adding projects and drag-and-drop for moving them between lanes. The library
//! holds the whole board: the data, the views and the event plumbing. The
//! binary is one client of it, a line-oriented terminal session.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Reads session commands, draws the board, shows alerts    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Board (app.rs)                                             │
//! │  - Mounts the views; turns gestures into dispatched events  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Views (components/)                                        │
//! │  - Form, lanes, cards; listen to events and to the store    │
//! └─────────────────────────────────────────────────────────────┘
//!              │                                │
//!              ▼                                ▼
//! ┌──────────────────────────┐    ┌──────────────────────────────┐
//! │  Store (store/)          │    │  Document (dom/)             │
//! │  - Projects + listeners  │    │  - Element tree, templates,  │
//! │                          │    │    event dispatch, alerts    │
//! └──────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! The store is the only source of truth. Views never patch each other: a
//! submit or a drop mutates the store, the store notifies every lane, and each
//! lane rebuilds its cards from the snapshot it was handed. Everything runs on
//! one thread, synchronously, in the order the events arrive.
//!
//! ## No Terminal Assumptions
//!
//! Nothing under this crate root prints, exits, or reads stdin. Validation
//! failures surface as queued alerts on the document, and the client decides
//! how to show them.
//!
//! ## Module Overview
//!
//! - [`app`]: the mounted board and its gestures
//! - [`components`]: the form, lane and card views
//! - [`config`]: board configuration
//! - [`dom`]: the element tree and event dispatch
//! - [`error`]: error types
//! - [`model`]: `Project` and `ProjectStatus`
//! - [`store`]: the project store and its listener registry
//! - [`validation`]: field constraint checks
//! - `cli`: the terminal session (binary only, not part of the lib API)

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
