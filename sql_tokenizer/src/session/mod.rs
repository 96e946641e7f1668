//! Language client lifecycle
//!
//! One `ConnectionManager` per editor instance owns at most one active
//! client. A new connection disposes the previous client before the new one
//! is started, all under one lock, so two clients are never live at once.
use crate::config::compile_time::session::*;
use crate::logging::codes;
use crate::{log_error, log_success, log_warning};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

pub const CLIENT_NAME: &str = "SQL Language Server MonacoClient";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Client '{client}' failed to start: {message}")]
    StartFailed { client: String, message: String },

    #[error("Gave up connecting after {attempts} attempt(s)")]
    RetriesExhausted { attempts: u32 },

    #[error("No language client is connected")]
    NotConnected,
}

impl SessionError {
    pub fn error_code(&self) -> codes::Code {
        match self {
            SessionError::StartFailed { .. } => codes::session::CLIENT_START_FAILURE,
            SessionError::RetriesExhausted { .. } => codes::session::RETRIES_EXHAUSTED,
            SessionError::NotConnected => codes::session::CLIENT_NOT_CONNECTED,
        }
    }
}

/// Bounded reconnection with growing delay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconnectPolicy {
    pub min_delay: Duration,
    pub max_delay: Duration,
    pub grow_factor: f64,
    pub connection_timeout: Duration,
    pub max_retries: u32,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(MIN_RECONNECTION_DELAY_MS),
            max_delay: Duration::from_millis(MAX_RECONNECTION_DELAY_MS),
            grow_factor: RECONNECTION_DELAY_GROW_FACTOR,
            connection_timeout: Duration::from_millis(CONNECTION_TIMEOUT_MS),
            max_retries: MAX_RETRIES,
        }
    }
}

impl ReconnectPolicy {
    /// Delay before attempt `attempt`; attempt 0 is the initial connect.
    /// `None` once retries are used up.
    pub fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        match attempt {
            0 => Some(Duration::ZERO),
            n if n <= self.max_retries => {
                let exponent = i32::try_from(n - 1).unwrap_or(i32::MAX);
                let grown = self.min_delay.as_secs_f64() * self.grow_factor.powi(exponent);
                let capped = grown.min(self.max_delay.as_secs_f64());
                Some(Duration::from_millis((capped * 1000.0).round() as u64))
            }
            _ => None,
        }
    }

    /// Delays of every attempt, initial connect included
    pub fn schedule(&self) -> Vec<Duration> {
        (0..=self.max_retries)
            .filter_map(|attempt| self.delay_for_attempt(attempt))
            .collect()
    }
}

/// What the client does after a transport error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorAction {
    #[default]
    Continue,
    Shutdown,
}

/// What the client does after the connection closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CloseAction {
    #[default]
    DoNotRestart,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    pub name: String,
    pub document_selector: Vec<String>,
    pub error_action: ErrorAction,
    pub close_action: CloseAction,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            name: CLIENT_NAME.to_string(),
            document_selector: vec![crate::language::LANGUAGE_ID.to_string()],
            error_action: ErrorAction::default(),
            close_action: CloseAction::default(),
        }
    }
}

/// A language server client as seen by the manager
pub trait LanguageClient {
    fn name(&self) -> &str;

    fn start(&mut self) -> Result<(), SessionError>;

    fn dispose(&mut self);
}

#[derive(Debug)]
struct ManagerState<C> {
    client: Option<C>,
    services_installed: bool,
    generation: u64,
}

/// Owns the active client of one editor instance
#[derive(Debug)]
pub struct ConnectionManager<C: LanguageClient> {
    state: Mutex<ManagerState<C>>,
    options: ClientOptions,
}

impl<C: LanguageClient> ConnectionManager<C> {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            state: Mutex::new(ManagerState {
                client: None,
                services_installed: false,
                generation: 0,
            }),
            options,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ManagerState<C>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Install editor services once; returns whether this call installed them
    pub fn install_services(&self) -> bool {
        let mut state = self.lock();
        if state.services_installed {
            return false;
        }
        state.services_installed = true;
        log_success!(codes::success::SERVICES_INSTALLED, "Editor services installed");
        true
    }

    /// Swap in a freshly connected client. The previous client is disposed
    /// first; if the new one fails to start the manager stays disconnected.
    pub fn on_connection(&self, mut client: C) -> Result<u64, SessionError> {
        let mut state = self.lock();

        if let Some(mut old) = state.client.take() {
            old.dispose();
            log_success!(codes::success::CLIENT_DISPOSED,
                "Previous language client disposed",
                "client" => old.name()
            );
        }

        if let Err(error) = client.start() {
            log_error!(error.error_code(), &error.to_string(),
                "client" => client.name()
            );
            return Err(error);
        }

        state.generation += 1;
        log_success!(codes::success::CLIENT_CONNECTED,
            "Language client started",
            "client" => client.name(),
            "generation" => state.generation
        );
        state.client = Some(client);
        Ok(state.generation)
    }

    /// Connect with retries. `connect` is called once per attempt with the
    /// attempt number and the policy's connection timeout; `sleep` receives
    /// the delay before each retry
    pub fn connect_with_retry<F, S>(
        &self,
        policy: &ReconnectPolicy,
        mut connect: F,
        mut sleep: S,
    ) -> Result<u64, SessionError>
    where
        F: FnMut(u32, Duration) -> Result<C, SessionError>,
        S: FnMut(Duration),
    {
        let mut attempt = 0;
        while let Some(delay) = policy.delay_for_attempt(attempt) {
            if !delay.is_zero() {
                sleep(delay);
            }

            let result = connect(attempt, policy.connection_timeout)
                .and_then(|client| self.on_connection(client));
            match result {
                Ok(generation) => return Ok(generation),
                Err(error) => {
                    log_warning!(code = error.error_code(),
                        "Connection attempt failed",
                        "attempt" => attempt,
                        "error" => error
                    );
                }
            }
            attempt += 1;
        }

        let error = SessionError::RetriesExhausted { attempts: attempt };
        log_error!(error.error_code(), &error.to_string());
        Err(error)
    }

    /// Transport closed; the client is not restarted
    pub fn on_close(&self) {
        if self.options.close_action == CloseAction::DoNotRestart {
            self.dispose();
        }
    }

    /// Dispose the active client, if any
    pub fn dispose(&self) {
        let mut state = self.lock();
        if let Some(mut client) = state.client.take() {
            client.dispose();
            log_success!(codes::success::CLIENT_DISPOSED,
                "Language client disposed",
                "client" => client.name()
            );
        }
    }

    /// Run `f` against the active client
    pub fn with_client<R>(&self, f: impl FnOnce(&mut C) -> R) -> Result<R, SessionError> {
        let mut state = self.lock();
        state
            .client
            .as_mut()
            .map(f)
            .ok_or(SessionError::NotConnected)
    }

    pub fn is_connected(&self) -> bool {
        self.lock().client.is_some()
    }

    pub fn services_installed(&self) -> bool {
        self.lock().services_installed
    }

    /// Number of successful connections so far
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }
}

impl<C: LanguageClient> Default for ConnectionManager<C> {
    fn default() -> Self {
        Self::new(ClientOptions::default())
    }
}
