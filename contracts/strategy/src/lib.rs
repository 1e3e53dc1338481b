pub mod api;

#[cfg(feature = "contract")]
pub mod contract;

#[cfg(feature = "contract")]
pub mod error;

#[cfg(feature = "contract")]
mod event;

#[cfg(feature = "contract")]
mod state;

#[cfg(feature = "contract")]
mod strategy;
