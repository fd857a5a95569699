//! Simulated back-office operations.
//!
//! Each call waits a fixed latency and then succeeds. There is no failure
//! path, no retry and no cancellation; calls share no state, so any number
//! may be in flight at once.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupSummary {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub size_mb: u32,
    pub progress: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    Healthy,
    Degraded,
}

/// AI console queue snapshot. The numbers wobble around fixed literals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueHealth {
    pub queued: u32,
    pub processing: u32,
    pub completed_today: u32,
    pub failed: u32,
    pub avg_processing_ms: u32,
    pub status: QueueStatus,
    pub refreshed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodUpdate {
    pub cardholder: String,
    pub last4: String,
    pub expiry: String,
}

impl PaymentMethodUpdate {
    /// Shape checks for the billing form: four card digits and an `MM/YY` expiry.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.cardholder.trim().is_empty() {
            return Err(AppError::Validation("Cardholder name is required".to_string()));
        }
        if self.last4.len() != 4 || !self.last4.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::Validation(
                "last4 must be exactly four digits".to_string(),
            ));
        }
        if !is_expiry(&self.expiry) {
            return Err(AppError::Validation("expiry must look like MM/YY".to_string()));
        }
        Ok(())
    }
}

fn is_expiry(raw: &str) -> bool {
    let Some((month, year)) = raw.split_once('/') else {
        return false;
    };
    let digits = |s: &str, n: usize| s.len() == n && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(month, 2) || !digits(year, 2) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentConfirmation {
    pub id: Uuid,
    pub cardholder: String,
    pub last4: String,
    pub expiry: String,
    pub status: String,
    pub processed_at: DateTime<Utc>,
}

const BACKUP_SIZE_MB: u32 = 248;
const QUEUED: u32 = 24;
const PROCESSING: u32 = 6;
const COMPLETED_TODAY: u32 = 1284;
const FAILED: u32 = 3;
const AVG_PROCESSING_MS: u32 = 2300;
const DEGRADED_FAILURES: u32 = 5;

#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    latency: Duration,
}

impl Simulator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub async fn run_backup(&self) -> BackupSummary {
        let started_at = Utc::now();
        tokio::time::sleep(self.latency).await;

        let summary = BackupSummary {
            id: Uuid::new_v4(),
            started_at,
            completed_at: Utc::now(),
            size_mb: BACKUP_SIZE_MB,
            progress: 100,
        };
        info!("Simulated backup {} finished", summary.id);
        summary
    }

    pub async fn refresh_ai_jobs(&self) -> QueueHealth {
        tokio::time::sleep(self.latency).await;
        let mut rng = rand::rng();
        queue_snapshot(&mut rng)
    }

    pub async fn update_payment_method(&self, update: PaymentMethodUpdate) -> PaymentConfirmation {
        tokio::time::sleep(self.latency).await;

        let confirmation = PaymentConfirmation {
            id: Uuid::new_v4(),
            cardholder: update.cardholder,
            last4: update.last4,
            expiry: update.expiry,
            status: "succeeded".to_string(),
            processed_at: Utc::now(),
        };
        info!("Simulated payment method update {}", confirmation.id);
        confirmation
    }
}

fn wobble<R: Rng + ?Sized>(rng: &mut R, base: u32, spread: u32) -> u32 {
    let low = base.saturating_sub(spread);
    rng.random_range(low..=base + spread)
}

fn queue_snapshot<R: Rng + ?Sized>(rng: &mut R) -> QueueHealth {
    let failed = wobble(rng, FAILED, 2);
    QueueHealth {
        queued: wobble(rng, QUEUED, 6),
        processing: wobble(rng, PROCESSING, 2),
        completed_today: wobble(rng, COMPLETED_TODAY, 40),
        failed,
        avg_processing_ms: wobble(rng, AVG_PROCESSING_MS, 400),
        status: if failed >= DEGRADED_FAILURES {
            QueueStatus::Degraded
        } else {
            QueueStatus::Healthy
        },
        refreshed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_backup_waits_fixed_latency_then_completes() {
        let simulator = Simulator::new(Duration::from_millis(1500));
        let before = Instant::now();
        let summary = simulator.run_backup().await;

        assert!(before.elapsed() >= Duration::from_millis(1500));
        assert_eq!(summary.progress, 100);
        assert_eq!(summary.size_mb, BACKUP_SIZE_MB);
    }

    #[tokio::test(start_paused = true)]
    async fn test_payment_update_always_succeeds() {
        let simulator = Simulator::new(Duration::from_secs(2));
        let confirmation = simulator
            .update_payment_method(PaymentMethodUpdate {
                cardholder: "Business Account".to_string(),
                last4: "4242".to_string(),
                expiry: "12/27".to_string(),
            })
            .await;

        assert_eq!(confirmation.status, "succeeded");
        assert_eq!(confirmation.last4, "4242");
    }

    fn card(cardholder: &str, last4: &str, expiry: &str) -> PaymentMethodUpdate {
        PaymentMethodUpdate {
            cardholder: cardholder.to_string(),
            last4: last4.to_string(),
            expiry: expiry.to_string(),
        }
    }

    #[test]
    fn test_payment_update_validation() {
        assert!(card("Business Account", "4242", "12/27").validate().is_ok());
        assert!(card("Business Account", "0001", "01/30").validate().is_ok());

        for bad in [
            card("  ", "4242", "12/27"),
            card("Business Account", "424", "12/27"),
            card("Business Account", "42a2", "12/27"),
            card("Business Account", "42424", "12/27"),
            card("Business Account", "4242", "13/27"),
            card("Business Account", "4242", "00/27"),
            card("Business Account", "4242", "1227"),
            card("Business Account", "4242", "12/2027"),
        ] {
            assert!(
                matches!(bad.validate(), Err(AppError::Validation(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_operations_do_not_serialize() {
        let simulator = Simulator::new(Duration::from_secs(1));
        let before = Instant::now();
        let (_, _, _) = tokio::join!(
            simulator.run_backup(),
            simulator.refresh_ai_jobs(),
            simulator.run_backup()
        );
        let elapsed = before.elapsed();
        assert!(elapsed >= Duration::from_secs(1));
        assert!(elapsed < Duration::from_secs(2));
    }

    #[test]
    fn test_queue_snapshot_stays_near_literals() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let health = queue_snapshot(&mut rng);
            assert!((18..=30).contains(&health.queued));
            assert!((4..=8).contains(&health.processing));
            assert!((1..=5).contains(&health.failed));
            assert!((1900..=2700).contains(&health.avg_processing_ms));
        }
    }

    #[test]
    fn test_queue_status_follows_failures() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let health = queue_snapshot(&mut rng);
            let expected = if health.failed >= DEGRADED_FAILURES {
                QueueStatus::Degraded
            } else {
                QueueStatus::Healthy
            };
            assert_eq!(health.status, expected);
        }
    }
}
