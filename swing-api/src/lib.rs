//! A barebones client for the Swing Music REST API.
#![deny(missing_docs)]

mod client;
pub use client::*;

mod album;
pub use album::*;

mod artist;
pub use artist::*;

mod track;
pub use track::*;

mod favorite;
pub use favorite::*;

mod listing;
pub use listing::*;

mod request;
