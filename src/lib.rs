//! Await callback-based request dispatchers.
//!
//! [`RequestBridge`] wraps any [`Dispatcher`] (something that sends a request
//! and later reports back through a completion callback) and exposes the
//! request as an `async` call.
//!
//! ```ignore
//! let bridge = RequestBridge::with_settings(provider, &BridgeSettings::load_user()?)?;
//! let response = bridge.request(target, None).await?;
//! let progress = bridge.request_with_progress(upload, None).await?;
//! ```

pub mod bridge;
pub mod config;
pub mod dispatcher;
pub mod error;

pub use bridge::{BridgeError, RequestBridge};
pub use config::{BridgeSettings, RequestTimeout};
pub use dispatcher::{Completion, Dispatcher, ProgressObserver};
pub use error::{Error, Result};
