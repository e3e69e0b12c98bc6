//! External integrations: upstream HTTP client and alert delivery.

pub mod alerting;
pub mod http;
