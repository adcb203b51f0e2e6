//! # morph-observable
//!
//! A JSON model whose members can be observed one by one.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use morph_observable::{ObservableModel, listener};
//! use serde_json::json;
//!
//! let mut model = ObservableModel::new();
//! model.add_listener("name", listener(|event| println!("{} -> {}", event.old_value, event.value)));
//! model.set("name", json!("Ada"));
//! ```
//!
//! ## Computed members
//!
//! A computed member is derived from the plain members. It is recomputed
//! and announced whenever one of its dependencies changes, or after any
//! plain member changes when it declares no dependencies. Computed members
//! cannot be set and are never enabled.

pub mod event;
pub mod listener;
pub mod model;

pub use event::ModelChangeEvent;
pub use listener::{EventListener, SharedListener, listener};
pub use model::{ComputedMember, ObservableModel};
