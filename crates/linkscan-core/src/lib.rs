pub mod config;
pub mod logging;

pub mod checker;
pub mod notify;
pub mod probe;
pub mod sink;
pub mod source;
pub mod transport;
pub mod url_model;
