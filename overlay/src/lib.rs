//! Coordinate spaces and annotation store for overlaying point annotations on
//! a water-distribution network.
//!
//! The crate owns no pixels. It maps between network-model space, normalized
//! drawing space and screen space, tracks the pan/zoom of each layer, turns
//! pointer events into pans or new annotations, and persists annotations in
//! network space so they survive any later zoom, pan or resize. Loading
//! networks and images, and drawing the result, are delegated to collaborators
//! behind the traits in [`network`], [`image`] and [`render`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::Session`]: per-session state and atomic loads |
//! | [`mapper`] | Network bounds and the network/drawing/screen transforms |
//! | [`view`] | Per-layer pan offset and zoom scale |
//! | [`store`] | Overlay categories, elements and the append-only store |
//! | [`persist`] | Overlay file codec |
//! | [`input`] | Layers, events and the press/drag/release state machine |
//! | [`hit`] | Occupied-region tests for starting a drag |
//! | [`render`] | Scene computation handed to a [`render::RenderSink`] |
//! | [`network`] | Network source collaborator and node/pipe model |
//! | [`image`] | Background image source collaborator |
//! | [`config`] | Environment-driven configuration |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Shared numeric constants |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod hit;
pub mod image;
pub mod input;
pub mod mapper;
pub mod network;
pub mod persist;
pub mod render;
pub mod store;
pub mod view;
