//! Demo logic: widget tree construction, event classification, and the
//! dynamic button area.

pub mod action;
pub mod event;
pub mod handler;
pub mod input;
pub mod state;
