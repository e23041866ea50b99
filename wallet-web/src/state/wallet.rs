//! Wallet state management
//!
//! Signals mirroring the controller. The controller is the source of truth;
//! these are only updated from its [`ControllerEvent`] stream.

use leptos::prelude::*;
use lib_wallet::{Controller, ControllerEvent, ControllerStatus, Session, WalletConfig};
use std::rc::Rc;

use crate::services::BrowserProvider;

pub type PanelController = Controller<BrowserProvider>;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub status: RwSignal<ControllerStatus>,
    pub session: RwSignal<Session>,
    /// Last submit outcome shown under the form
    pub notice: RwSignal<Option<String>>,
    controller: StoredValue<Rc<PanelController>, LocalStorage>,
    config: StoredValue<WalletConfig>,
}

impl WalletContext {
    pub fn new(controller: Rc<PanelController>) -> Self {
        Self {
            status: RwSignal::new(controller.status()),
            session: RwSignal::new(controller.session()),
            notice: RwSignal::new(None),
            config: StoredValue::new(controller.config().clone()),
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> Rc<PanelController> {
        self.controller.get_value()
    }

    pub fn config(&self) -> WalletConfig {
        self.config.get_value()
    }

    pub fn apply(&self, event: ControllerEvent) {
        match event {
            ControllerEvent::Status(status) => self.status.set(status),
            ControllerEvent::Session(session) => self.session.set(session),
        }
    }
}

pub fn provide_wallet_context(controller: Rc<PanelController>) -> WalletContext {
    let context = WalletContext::new(controller);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
