#![forbid(unsafe_code)]

//! Keyboard focus trapping.
//!
//! A [`FocusScope`] constrains Tab navigation to cycle within the
//! focusable elements of a container while active. The scope never owns
//! focus itself — the host does — so the boundary is a small trait:
//!
//! - [`FocusHost`] reports where focus currently is and applies focus
//!   moves the scope requests.
//!
//! The scope only intercepts Tab at the cycle boundaries (first element
//! with Shift, last element without); everywhere else the host's default
//! tab order proceeds unimpeded.

mod scope;

pub use scope::{FocusHost, FocusScope};
