use crate::foundation::util::redact::redact_url;
use crate::foundation::{GiveawayError, DEFAULT_RPC_TIMEOUT_SECS};
use crate::infrastructure::rpc::{NodeRpc, RpcEnvelope};
use async_trait::async_trait;
use log::{debug, trace, warn};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct HttpNodeRpcConfig {
    pub url: String,
    pub user: String,
    pub password: SecretString,
    pub timeout: Duration,
}

impl HttpNodeRpcConfig {
    pub fn new(url: impl Into<String>, user: impl Into<String>, password: SecretString) -> Self {
        Self { url: url.into(), user: user.into(), password, timeout: Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECS) }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// JSON-RPC 2.0 over HTTP POST with Basic auth. Never retries.
pub struct HttpNodeRpc {
    client: Client,
    url: String,
    user: String,
    password: SecretString,
    next_id: AtomicU64,
}

#[derive(Serialize)]
struct Request<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a Value,
}

impl HttpNodeRpc {
    pub fn new(config: HttpNodeRpcConfig) -> Result<Self, GiveawayError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        debug!("http rpc client created url={} timeout_ms={}", redact_url(&config.url), config.timeout.as_millis());
        Ok(Self { client, url: config.url, user: config.user, password: config.password, next_id: AtomicU64::new(1) })
    }

    pub fn redacted_url(&self) -> String {
        redact_url(&self.url)
    }
}

#[async_trait]
impl NodeRpc for HttpNodeRpc {
    async fn call(&self, method: &str, params: Value) -> Result<RpcEnvelope, GiveawayError> {
        let started = Instant::now();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        trace!("http rpc request method={} id={}", method, id);

        let request = Request { jsonrpc: "2.0", id, method, params: &params };
        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.user, Some(self.password.expose_secret()))
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                warn!("http rpc send failed method={} url={} error={}", method, self.redacted_url(), err);
                GiveawayError::from(err)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| GiveawayError::transport("read_body", format!("method={} {}", method, err)))?;

        let value: Value = serde_json::from_slice(&body).map_err(|err| {
            warn!("http rpc non-json response method={} status={} body_len={}", method, status.as_u16(), body.len());
            GiveawayError::transport("decode", format!("method={} status={} {}", method, status.as_u16(), err))
        })?;
        let is_envelope = value.as_object().map(|obj| obj.contains_key("result") || obj.contains_key("error")).unwrap_or(false);
        if !is_envelope {
            return Err(GiveawayError::transport("decode", format!("method={} status={} body is not a json-rpc envelope", method, status.as_u16())));
        }
        let envelope: RpcEnvelope = serde_json::from_value(value)?;

        if !status.is_success() {
            debug!("http rpc error status method={} status={} error={:?}", method, status.as_u16(), envelope.error_message());
        }
        debug!("http rpc response method={} id={} ok={} elapsed_ms={}", method, id, envelope.is_ok(), started.elapsed().as_millis());
        Ok(envelope)
    }
}
