#![no_std]

//! Shared building blocks for the NFT auction houses.
//!
//! Both the Dutch and the English house keep one live auction per
//! `(collection, item)` pair, custody the item while it is listed, hold the
//! highest bid in escrow and pay the proceeds out through a fee terminal and
//! a weighted split list on settlement. Everything the two variants have in
//! common lives here; the contracts only add their pricing and settlement
//! gating on top.

pub mod admin;
pub mod constants;
pub mod custody;
pub mod errors;
pub mod events;
pub mod guard;
pub mod house;
pub mod interface;
pub mod payout;
pub mod storage;
pub mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use errors::Error;
pub use types::{Auction, FeeReceiver, HouseConfig, Split, SplitTarget};
