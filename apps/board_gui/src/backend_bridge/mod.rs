//! Backend worker: runs authority requests off the UI thread.

pub mod runtime;
