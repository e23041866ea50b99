//! # Wallet Controller
//!
//! Orchestrates the panel: owns the [`Session`], sequences provider calls
//! through the [`ProviderAdapter`] and tracks where the panel is in its
//! lifecycle.
//!
//! ```text
//! Uninitialized ──connect──► Connecting ──ok──► Ready ──submit──► Submitting
//!       ▲                        │                ▲                   │
//!       └──── (no provider)      └──err──► Failed │◄──── ok / err ────┘
//!                                            │    │
//!                                            └─connect (retry)
//! ```
//!
//! ## Concurrency
//!
//! Everything runs on one cooperative executor; provider calls are the only
//! suspension points. Session and status sit behind `parking_lot` locks that
//! are never held across an `.await`, and every decision taken after a
//! provider call re-reads the current state.
//!
//! ## Observation
//!
//! With [`Controller::with_events`] the controller publishes a
//! [`ControllerEvent`] after every status or session change. The frontend
//! pumps these into its reactive state.

use crate::adapter::{ProviderAdapter, TransferReceipt};
use crate::config::WalletConfig;
use crate::error::{Result, SubmitError, WalletError};
use crate::provider::WalletProvider;
use crate::session::Session;
use crate::validator::{validate, TransferRequest};
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{short_address, Asset, Network};
use std::fmt;
use uuid::Uuid;

/// Lifecycle state of the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ControllerStatus {
    /// Not connected. Also the resting state when no provider is injected.
    #[default]
    Uninitialized,
    Connecting,
    Ready,
    /// A transfer is waiting on the provider.
    Submitting,
    /// Connect-and-fetch failed. A manual connect retries.
    Failed(WalletError),
}

impl ControllerStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Whether [`Controller::connect`] would run from this state.
    pub fn can_connect(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::Failed(_))
    }
}

impl fmt::Display for ControllerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Connecting => write!(f, "connecting"),
            Self::Ready => write!(f, "ready"),
            Self::Submitting => write!(f, "submitting"),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Change notification for observers.
#[derive(Clone, Debug, PartialEq)]
pub enum ControllerEvent {
    Status(ControllerStatus),
    Session(Session),
}

pub struct Controller<P> {
    adapter: ProviderAdapter<P>,
    session: RwLock<Session>,
    status: RwLock<ControllerStatus>,
    events: Option<Sender<ControllerEvent>>,
}

impl<P: WalletProvider> Controller<P> {
    /// Controller with an empty session, not yet connected.
    pub fn new(provider: P, config: WalletConfig) -> Self {
        Self {
            adapter: ProviderAdapter::new(provider, config),
            session: RwLock::new(Session::new()),
            status: RwLock::new(ControllerStatus::Uninitialized),
            events: None,
        }
    }

    /// Publish status and session changes on `events`.
    pub fn with_events(mut self, events: Sender<ControllerEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn status(&self) -> ControllerStatus {
        self.status.read().clone()
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn config(&self) -> &WalletConfig {
        self.adapter.config()
    }

    pub fn is_provider_available(&self) -> bool {
        self.adapter.is_available()
    }

    /// Connect to the provider and fetch both balances.
    ///
    /// Runs on mount and again on a manual retry. Only starts from
    /// `Uninitialized` or `Failed`; in any other state it's ignored. Without a
    /// provider the controller stays `Uninitialized`. Returns the status the
    /// controller ends in.
    pub async fn connect(&self) -> ControllerStatus {
        if !self.adapter.is_available() {
            tracing::warn!("no wallet provider injected, staying uninitialized");
            return self.status();
        }

        {
            let mut status = self.status.write();
            if !status.can_connect() {
                let current = status.clone();
                tracing::debug!(status = %current, "connect ignored");
                return current;
            }
            *status = ControllerStatus::Connecting;
        }
        self.publish(ControllerEvent::Status(ControllerStatus::Connecting));
        tracing::info!("connecting to wallet provider");

        let next = match self.connect_and_fetch().await {
            Ok((account, primary, secondary)) => {
                tracing::info!(
                    account = %short_address(&account),
                    primary = %primary,
                    secondary = %secondary,
                    "wallet connected"
                );
                self.session.write().initialize(account, primary, secondary);
                self.publish_session();
                ControllerStatus::Ready
            }
            Err(e) => {
                tracing::error!(error = %e, "wallet connection failed");
                ControllerStatus::Failed(e)
            }
        };

        self.set_status(next.clone());
        next
    }

    async fn connect_and_fetch(&self) -> Result<(String, String, String)> {
        let account = self.adapter.connect().await?;
        let primary = self.adapter.get_balance(&account, Asset::Primary).await?;
        let secondary = self.adapter.get_balance(&account, Asset::Secondary).await?;
        Ok((account, primary, secondary))
    }

    /// Switch networks.
    ///
    /// The session changes immediately; the provider is asked to follow. If
    /// it refuses, the local selection is kept and the error is returned.
    /// Allowed in every state.
    pub async fn change_network(&self, network: Network) -> Result<()> {
        self.session.write().set_network(network);
        self.publish_session();
        tracing::info!(network = %network, "network selected");

        match self.adapter.switch_chain(network).await {
            Ok(()) => {
                tracing::debug!(chain_id = %self.config().chain_id(network), "provider switched chain");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    network = %network,
                    error = %e,
                    "chain switch failed, keeping local network selection"
                );
                Err(e)
            }
        }
    }

    /// Select the asset to transfer. Returns false while transfers are locked.
    pub fn select_asset(&self, asset: Asset) -> bool {
        let changed = self.session.write().set_selected_asset(asset);
        if changed {
            self.publish_session();
        } else {
            tracing::debug!(asset = %asset, "asset selection ignored while transfer-locked");
        }
        changed
    }

    /// Validate and submit a transfer from the connected account.
    ///
    /// Requires `Ready`. Validation failures never reach the provider. On
    /// provider acceptance or failure the controller returns to `Ready`;
    /// balances are not refreshed.
    pub async fn submit(
        &self,
        request: TransferRequest,
    ) -> std::result::Result<TransferReceipt, SubmitError> {
        let attempt = Uuid::new_v4();

        let from = {
            let mut status = self.status.write();
            if !status.is_ready() {
                let current = status.clone();
                tracing::warn!(%attempt, status = %current, "submit refused");
                return Err(SubmitError::NotReady(current));
            }

            let session = self.session.read();
            if let Err(rejection) = validate(&session, &request) {
                tracing::warn!(%attempt, reason = %rejection, "transfer rejected");
                return Err(rejection.into());
            }
            let from = match session.account() {
                Some(account) => account.to_string(),
                None => return Err(SubmitError::NotReady(status.clone())),
            };

            *status = ControllerStatus::Submitting;
            from
        };
        self.publish(ControllerEvent::Status(ControllerStatus::Submitting));

        tracing::info!(
            %attempt,
            to = %short_address(&request.recipient),
            amount = %request.amount,
            asset = self.config().symbol(request.asset),
            "submitting transfer"
        );

        let result = self
            .adapter
            .send_value_transfer(&from, &request.recipient, &request.amount)
            .await;

        self.set_status(ControllerStatus::Ready);

        match &result {
            Ok(receipt) => {
                tracing::info!(%attempt, hash = %receipt.hash_hex(), "transfer accepted by provider")
            }
            Err(e) => {
                tracing::warn!(%attempt, error = %e, "transfer failed")
            }
        }
        result.map_err(SubmitError::from)
    }

    fn set_status(&self, next: ControllerStatus) {
        *self.status.write() = next.clone();
        self.publish(ControllerEvent::Status(next));
    }

    fn publish_session(&self) {
        let snapshot = self.session();
        self.publish(ControllerEvent::Session(snapshot));
    }

    fn publish(&self, event: ControllerEvent) {
        if let Some(events) = &self.events {
            if events.try_send(event).is_err() {
                tracing::trace!("event receiver gone, dropping event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(ControllerStatus::Uninitialized.to_string(), "uninitialized");
        assert_eq!(ControllerStatus::Submitting.to_string(), "submitting");
        assert_eq!(
            ControllerStatus::Failed(WalletError::AuthorizationDenied).to_string(),
            "failed: Account authorization denied"
        );
    }

    #[test]
    fn test_connect_allowed_states() {
        assert!(ControllerStatus::Uninitialized.can_connect());
        assert!(ControllerStatus::Failed(WalletError::NoAccounts).can_connect());
        assert!(!ControllerStatus::Connecting.can_connect());
        assert!(!ControllerStatus::Ready.can_connect());
        assert!(!ControllerStatus::Submitting.can_connect());
    }
}
