//! EIP-1193 Provider Integration via wasm-bindgen
//!
//! Implements [`WalletProvider`] over the injected `window.ethereum` object.
//! Every call is one `ethereum.request({ method, params })`; rejected promises
//! are unpacked into [`ProviderError`] with the provider's numeric code.

use async_trait::async_trait;
use js_sys::Reflect;
use lib_wallet::provider::{TransferTx, WalletProvider};
use lib_wallet::units::{parse_hex_quantity, to_hex_quantity};
use lib_wallet::{Address, ProviderError, U256};
use serde::Serialize;
use shared::ChainId;
use wasm_bindgen::prelude::*;

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasEthereum() {
    return typeof window !== 'undefined'
        && window.ethereum !== undefined
        && window.ethereum !== null
        && typeof window.ethereum.request === 'function';
}

export async function ethereumRequest(method, params) {
    if (!hasEthereum()) {
        throw { code: null, message: 'No wallet provider available' };
    }
    return await window.ethereum.request({ method: method, params: params });
}
")]
extern "C" {
    /// Whether `window.ethereum` exists and looks like an EIP-1193 provider
    fn hasEthereum() -> bool;

    /// Issue a single EIP-1193 request
    #[wasm_bindgen(catch)]
    async fn ethereumRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

// ============================================================================
// REQUEST PAYLOADS
// ============================================================================

#[derive(Serialize)]
struct SwitchChainParams {
    #[serde(rename = "chainId")]
    chain_id: ChainId,
}

#[derive(Serialize)]
struct SendTransactionParams {
    from: String,
    to: String,
    value: String,
}

impl From<&TransferTx> for SendTransactionParams {
    fn from(tx: &TransferTx) -> Self {
        Self {
            from: format!("{:?}", tx.from),
            to: format!("{:?}", tx.to),
            value: to_hex_quantity(tx.value),
        }
    }
}

// ============================================================================
// PROVIDER
// ============================================================================

/// `window.ethereum` as a [`WalletProvider`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserProvider;

impl BrowserProvider {
    pub fn new() -> Self {
        Self
    }

    async fn request<P: Serialize>(&self, method: &str, params: &P) -> Result<JsValue, ProviderError> {
        let params = serde_wasm_bindgen::to_value(params)
            .map_err(|e| ProviderError::new(None, format!("could not encode {} params: {}", method, e)))?;

        log::debug!("ethereum.request {}", method);
        ethereumRequest(method, params).await.map_err(provider_error)
    }
}

/// Unpack an EIP-1193 error object (`{ code, message }`). Anything else thrown
/// is kept as text without a code.
fn provider_error(err: JsValue) -> ProviderError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| code as i64);

    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    ProviderError::new(code, message)
}

fn expect_string(value: JsValue, what: &str) -> Result<String, ProviderError> {
    value
        .as_string()
        .ok_or_else(|| ProviderError::new(None, format!("{} is not a string", what)))
}

#[async_trait(?Send)]
impl WalletProvider for BrowserProvider {
    fn is_injected(&self) -> bool {
        hasEthereum()
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        let accounts = self.request("eth_requestAccounts", &()).await?;
        serde_wasm_bindgen::from_value(accounts)
            .map_err(|e| ProviderError::new(None, format!("accounts: {}", e)))
    }

    async fn chain_id(&self) -> Result<ChainId, ProviderError> {
        let chain_id = self.request("eth_chainId", &()).await?;
        expect_string(chain_id, "chain id")?
            .parse::<ChainId>()
            .map_err(|e| ProviderError::new(None, e.to_string()))
    }

    async fn get_balance(&self, account: &Address) -> Result<U256, ProviderError> {
        let params = (format!("{:?}", account), "latest");
        let balance = self.request("eth_getBalance", &params).await?;
        let balance = expect_string(balance, "balance")?;
        parse_hex_quantity(&balance).map_err(|e| ProviderError::new(None, e.to_string()))
    }

    async fn switch_chain(&self, chain_id: ChainId) -> Result<(), ProviderError> {
        let params = [SwitchChainParams { chain_id }];
        self.request("wallet_switchEthereumChain", &params).await?;
        Ok(())
    }

    async fn send_transaction(&self, tx: &TransferTx) -> Result<String, ProviderError> {
        let params = [SendTransactionParams::from(tx)];
        let hash = self.request("eth_sendTransaction", &params).await?;
        expect_string(hash, "transaction hash")
    }
}
