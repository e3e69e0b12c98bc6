//! Log-backed alert sink.
//!
//! The delivery transport (email, chat) is an external collaborator; this
//! sink records the alert at error level, addressed to the configured
//! operator when one is set.

use async_trait::async_trait;

use crate::domain::gateways::AlertSink;

pub struct LogAlertSink {
    admin_email: Option<String>,
}

impl LogAlertSink {
    pub fn new(admin_email: Option<String>) -> Self {
        Self { admin_email }
    }
}

#[async_trait]
impl AlertSink for LogAlertSink {
    async fn notify(&self, failed_fields: &[String]) {
        let message = format!(
            "The following selectors failed validation: {}. \
             Please update the environment variables or fallback selectors.",
            failed_fields.join(", ")
        );

        match &self.admin_email {
            Some(admin) => {
                tracing::error!(to = %admin, "Admin alert: {message}");
            }
            None => {
                tracing::error!("Admin alert destination not configured. {message}");
            }
        }
    }
}
