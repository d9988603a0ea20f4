//! Transaction feed wire types and HTTP client.
//!
//! The monitoring backend exposes a single read-only query returning the
//! current transaction list, active alerts, and account statistics. Each
//! snapshot replaces the previous one wholesale; records carry no identity
//! across polls.

use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Request timeout for a single feed fetch. The backend answers from memory,
/// so anything slower than this is treated as a transport failure.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(4);

/// Errors a single fetch-and-parse cycle can produce. Both kinds are handled
/// identically at the cycle boundary: logged, with the prior render left
/// standing.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed feed payload: {0}")]
    Payload(String),
}

/// Alert severity as classified upstream. Unrecognized values fold into
/// `Low` so a newer backend cannot break rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(from = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Severity::High,
            "MEDIUM" => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

/// Whether a transaction moves money into or out of the monitored account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxDirection {
    Credit,
    Debit,
}

impl TxDirection {
    /// Amount prefix shown next to the formatted value.
    pub fn sign(&self) -> char {
        match self {
            TxDirection::Credit => '+',
            TxDirection::Debit => '-',
        }
    }
}

/// One transaction as reported by the feed. `time_ago` is a display string
/// derived server-side; the client never re-derives it.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    pub sender: String,
    pub receiver: String,
    pub amount: f64,
    pub time_ago: String,
    #[serde(default)]
    pub is_anomaly: bool,
}

impl TransactionRecord {
    /// A transfer is a credit when the monitored account is the receiver.
    pub fn direction(&self, account_name: &str) -> TxDirection {
        if self.receiver == account_name {
            TxDirection::Credit
        } else {
            TxDirection::Debit
        }
    }

    /// Row description naming the counterparty.
    pub fn describe(&self, account_name: &str) -> String {
        match self.direction(account_name) {
            TxDirection::Credit => format!("Payment Received - {}", self.sender),
            TxDirection::Debit => format!("Payment Sent - {}", self.receiver),
        }
    }
}

/// One active alert. Severity drives iconography and styling only.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertRecord {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub time_ago: String,
}

/// A complete feed payload. Replaces all three rendered regions atomically.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSnapshot {
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    #[serde(default)]
    pub alerts: Vec<AlertRecord>,
    pub account_balance: f64,
    pub total_transactions: u64,
    pub anomaly_count: u64,
}

impl FeedSnapshot {
    /// Reject payloads that violate the feed's documented invariants.
    pub fn validate(self) -> Result<Self, FeedError> {
        if self.anomaly_count > self.total_transactions {
            return Err(FeedError::Payload(format!(
                "anomaly count {} exceeds total transaction count {}",
                self.anomaly_count, self.total_transactions
            )));
        }
        if let Some(tx) = self.transactions.iter().find(|t| t.amount < 0.0) {
            return Err(FeedError::Payload(format!(
                "negative transaction amount {} from {}",
                tx.amount, tx.sender
            )));
        }
        Ok(self)
    }

    /// Share of transactions flagged anomalous, in percent. Zero when no
    /// transactions have been recorded yet.
    pub fn anomaly_percentage(&self) -> f64 {
        if self.total_transactions == 0 {
            0.0
        } else {
            self.anomaly_count as f64 / self.total_transactions as f64 * 100.0
        }
    }
}

/// HTTP client for the transactions endpoint.
#[derive(Clone)]
pub struct FeedClient {
    http: HttpClient,
    endpoint: Url,
}

impl FeedClient {
    pub fn new(endpoint: Url) -> Result<Self, FeedError> {
        let http = HttpClient::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and validate one snapshot. The body is read as text first so a
    /// JSON error maps to the payload arm of the taxonomy rather than a
    /// transport error.
    pub async fn fetch_snapshot(&self) -> Result<FeedSnapshot, FeedError> {
        let body = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let snapshot: FeedSnapshot =
            serde_json::from_str(&body).map_err(|e| FeedError::Payload(e.to_string()))?;
        snapshot.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "TechCorp Solutions";

    fn sample_payload() -> &'static str {
        r#"{
            "transactions": [
                {"sender": "Redwood Analytics", "receiver": "TechCorp Solutions",
                 "amount": 18250.75, "time_ago": "2 minutes ago", "is_anomaly": false},
                {"sender": "TechCorp Solutions", "receiver": "Nexora Digital",
                 "amount": 420000.0, "time_ago": "5 minutes ago", "is_anomaly": true}
            ],
            "alerts": [
                {"title": "High Amount Transaction",
                 "description": "Transfer well above the usual range",
                 "severity": "HIGH", "time_ago": "5 minutes ago"}
            ],
            "account_balance": 5000000.0,
            "total_transactions": 40,
            "anomaly_count": 1
        }"#
    }

    #[test]
    fn deserializes_full_payload() {
        let snapshot: FeedSnapshot = serde_json::from_str(sample_payload()).unwrap();
        assert_eq!(snapshot.transactions.len(), 2);
        assert_eq!(snapshot.alerts.len(), 1);
        assert_eq!(snapshot.total_transactions, 40);
        assert_eq!(snapshot.anomaly_count, 1);
        assert!(snapshot.transactions[1].is_anomaly);
        assert_eq!(snapshot.alerts[0].severity, Severity::High);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let snapshot: FeedSnapshot = serde_json::from_str(
            r#"{"account_balance": 0.0, "total_transactions": 0, "anomaly_count": 0}"#,
        )
        .unwrap();
        assert!(snapshot.transactions.is_empty());
        assert!(snapshot.alerts.is_empty());
    }

    #[test]
    fn severity_parses_known_and_unknown_values() {
        assert_eq!(Severity::from("HIGH".to_string()), Severity::High);
        assert_eq!(Severity::from("medium".to_string()), Severity::Medium);
        assert_eq!(Severity::from("LOW".to_string()), Severity::Low);
        assert_eq!(Severity::from("CRITICAL".to_string()), Severity::Low);
        assert_eq!(Severity::from("".to_string()), Severity::Low);
    }

    #[test]
    fn severity_orders_low_to_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn incoming_transfer_is_credit_with_plus_sign() {
        let snapshot: FeedSnapshot = serde_json::from_str(sample_payload()).unwrap();
        let tx = &snapshot.transactions[0];
        assert_eq!(tx.direction(ACCOUNT), TxDirection::Credit);
        assert_eq!(tx.direction(ACCOUNT).sign(), '+');
        assert_eq!(tx.describe(ACCOUNT), "Payment Received - Redwood Analytics");
    }

    #[test]
    fn outgoing_transfer_is_debit_with_minus_sign() {
        let snapshot: FeedSnapshot = serde_json::from_str(sample_payload()).unwrap();
        let tx = &snapshot.transactions[1];
        assert_eq!(tx.direction(ACCOUNT), TxDirection::Debit);
        assert_eq!(tx.direction(ACCOUNT).sign(), '-');
        assert_eq!(tx.describe(ACCOUNT), "Payment Sent - Nexora Digital");
    }

    #[test]
    fn anomaly_percentage_matches_counts() {
        let snapshot: FeedSnapshot = serde_json::from_str(sample_payload()).unwrap();
        assert_eq!(snapshot.anomaly_percentage(), 2.5);
        assert_eq!(format!("{:.1}%", snapshot.anomaly_percentage()), "2.5%");
    }

    #[test]
    fn anomaly_percentage_is_zero_without_transactions() {
        let snapshot = FeedSnapshot {
            transactions: Vec::new(),
            alerts: Vec::new(),
            account_balance: 0.0,
            total_transactions: 0,
            anomaly_count: 0,
        };
        assert_eq!(snapshot.anomaly_percentage(), 0.0);
    }

    #[test]
    fn validate_rejects_anomaly_count_above_total() {
        let snapshot = FeedSnapshot {
            transactions: Vec::new(),
            alerts: Vec::new(),
            account_balance: 100.0,
            total_transactions: 3,
            anomaly_count: 4,
        };
        let err = snapshot.validate().unwrap_err();
        assert!(matches!(err, FeedError::Payload(_)));
    }

    #[test]
    fn validate_rejects_negative_amounts() {
        let snapshot = FeedSnapshot {
            transactions: vec![TransactionRecord {
                sender: "Starcrest Ventures".to_string(),
                receiver: ACCOUNT.to_string(),
                amount: -12.0,
                time_ago: "just now".to_string(),
                is_anomaly: false,
            }],
            alerts: Vec::new(),
            account_balance: 100.0,
            total_transactions: 1,
            anomaly_count: 0,
        };
        assert!(matches!(
            snapshot.validate(),
            Err(FeedError::Payload(_))
        ));
    }

    #[test]
    fn validate_accepts_well_formed_snapshot() {
        let snapshot: FeedSnapshot = serde_json::from_str(sample_payload()).unwrap();
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn malformed_body_is_a_payload_error() {
        let err = serde_json::from_str::<FeedSnapshot>("{\"account_balance\": \"oops\"}")
            .map_err(|e| FeedError::Payload(e.to_string()))
            .unwrap_err();
        assert!(matches!(err, FeedError::Payload(_)));
    }
}
