use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::entities::vitals::{Alert, AlertReceipt};

/// Alert delivery errors
#[derive(Debug, Error)]
pub enum AlertError {
    /// The downstream paging or messaging service rejected the alert
    #[error("Alert delivery failed: {0}")]
    Delivery(String),
}

/// Seam for the downstream notification service (SMS, email, paging)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertNotifier: Send + Sync {
    /// Hand an alert to the notification channel
    async fn notify(&self, alert: Alert) -> Result<AlertReceipt, AlertError>;
}

/// Notifier that records the alert in the log and acknowledges it
///
/// Nothing is delivered; the receipt echoes the alert back to the caller.
#[derive(Debug, Default, Clone)]
pub struct LogOnlyNotifier;

impl LogOnlyNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AlertNotifier for LogOnlyNotifier {
    async fn notify(&self, alert: Alert) -> Result<AlertReceipt, AlertError> {
        let alert_id = Uuid::new_v4();
        warn!(
            alert_id = %alert_id,
            patient_id = %alert.patient_id,
            message = %alert.message,
            "SOS alert raised (no delivery channel configured)"
        );

        Ok(AlertReceipt {
            alert_id,
            patient_id: alert.patient_id,
            message: alert.message,
            sent_at: Utc::now(),
        })
    }
}

/// Forward an alert to the notifier, logging the outcome
pub async fn dispatch_alert(
    notifier: &dyn AlertNotifier,
    alert: Alert,
) -> Result<AlertReceipt, AlertError> {
    info!("Dispatching alert for patient {}", alert.patient_id);
    match notifier.notify(alert).await {
        Ok(receipt) => {
            info!(alert_id = %receipt.alert_id, "Alert acknowledged");
            Ok(receipt)
        }
        Err(e) => {
            error!("Alert dispatch failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_only_notifier_echoes_alert() {
        let notifier = LogOnlyNotifier::new();
        let receipt = notifier
            .notify(Alert {
                patient_id: "p1".to_string(),
                message: "Fall detected".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(receipt.patient_id, "p1");
        assert_eq!(receipt.message, "Fall detected");
    }

    #[tokio::test]
    async fn test_log_only_notifier_issues_unique_ids() {
        let notifier = LogOnlyNotifier::new();
        let alert = Alert {
            patient_id: "p1".to_string(),
            message: "Help".to_string(),
        };

        let first = notifier.notify(alert.clone()).await.unwrap();
        let second = notifier.notify(alert).await.unwrap();
        assert_ne!(first.alert_id, second.alert_id);
    }

    #[tokio::test]
    async fn test_dispatch_forwards_alert_unchanged() {
        let mut notifier = MockAlertNotifier::new();
        notifier
            .expect_notify()
            .withf(|alert| alert.patient_id == "p9" && alert.message == "Chest pain")
            .times(1)
            .returning(|alert| {
                Ok(AlertReceipt {
                    alert_id: Uuid::nil(),
                    patient_id: alert.patient_id,
                    message: alert.message,
                    sent_at: Utc::now(),
                })
            });

        let receipt = dispatch_alert(
            &notifier,
            Alert {
                patient_id: "p9".to_string(),
                message: "Chest pain".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(receipt.alert_id, Uuid::nil());
        assert_eq!(receipt.patient_id, "p9");
    }

    #[tokio::test]
    async fn test_dispatch_propagates_delivery_failure() {
        let mut notifier = MockAlertNotifier::new();
        notifier
            .expect_notify()
            .returning(|_| Err(AlertError::Delivery("gateway timeout".to_string())));

        let result = dispatch_alert(
            &notifier,
            Alert {
                patient_id: "p9".to_string(),
                message: "Chest pain".to_string(),
            },
        )
        .await;

        assert!(result.unwrap_err().to_string().contains("gateway timeout"));
    }
}
