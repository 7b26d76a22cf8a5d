//! Async driver for the login form.
//!
//! [`LoginController`] owns a [`LoginForm`] and processes events one at a
//! time on a single task. The authentication call is the only thing that
//! runs concurrently: it is spawned and its outcome is fed back into the
//! same loop as a [`FormEvent`].

use std::sync::Arc;

use log::{debug, error, info};
use portico_validation::Validation;
use tokio::sync::{mpsc, watch};

use crate::auth::Authentication;
use crate::error::AuthError;
use crate::form::{Command, FormEvent, FormPhase, FormState, FormView, LoginForm};
use crate::storage::Storage;

/// Cloneable sender of user input to a running [`LoginController`].
///
/// Methods return `false` once the controller has stopped.
#[derive(Debug, Clone)]
pub struct FormHandle {
    tx: mpsc::UnboundedSender<FormEvent>,
}

impl FormHandle {
    /// Report a new value for `field`.
    pub fn input(&self, field: impl Into<String>, value: impl Into<String>) -> bool {
        self.send(FormEvent::field_changed(field, value))
    }

    /// Ask to submit the form. Ignored unless the form can submit.
    pub fn submit(&self) -> bool {
        self.send(FormEvent::Submit)
    }

    fn send(&self, event: FormEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Runs a [`LoginForm`] against real collaborators.
///
/// # Example
///
/// ```ignore
/// let controller = LoginController::new(validation, authentication, storage);
/// let handle = controller.handle();
/// let mut view = controller.subscribe();
/// let task = tokio::spawn(controller.run());
///
/// handle.input("email", "ana@example.com");
/// handle.input("password", "secret");
/// handle.submit();
/// ```
pub struct LoginController {
    form: LoginForm,
    authentication: Arc<dyn Authentication>,
    storage: Arc<dyn Storage>,
    input_tx: mpsc::UnboundedSender<FormEvent>,
    input_rx: mpsc::UnboundedReceiver<FormEvent>,
    view_tx: watch::Sender<FormView>,
}

impl LoginController {
    pub fn new(
        validation: Arc<dyn Validation>,
        authentication: Arc<dyn Authentication>,
        storage: Arc<dyn Storage>,
    ) -> Self {
        let form = LoginForm::new(validation);
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (view_tx, _) = watch::channel(form.view());

        Self {
            form,
            authentication,
            storage,
            input_tx,
            input_rx,
            view_tx,
        }
    }

    /// A handle for sending input. Create handles before calling [`run`](Self::run).
    pub fn handle(&self) -> FormHandle {
        FormHandle {
            tx: self.input_tx.clone(),
        }
    }

    /// Observe the form. The receiver sees the latest view after every event.
    pub fn subscribe(&self) -> watch::Receiver<FormView> {
        self.view_tx.subscribe()
    }

    pub fn state(&self) -> &FormState {
        self.form.state()
    }

    /// Process events until the login completes, or until every handle is
    /// dropped and no authentication is in flight. Returns the final state.
    pub async fn run(self) -> FormState {
        let Self {
            mut form,
            authentication,
            storage,
            input_tx,
            mut input_rx,
            view_tx,
        } = self;
        drop(input_tx);

        let (done_tx, mut done_rx) = mpsc::unbounded_channel();
        let mut inputs_open = true;
        let mut in_flight = false;

        loop {
            let event = tokio::select! {
                // Queued input is handled before completions
                biased;

                event = input_rx.recv(), if inputs_open => match event {
                    Some(event) => event,
                    None => {
                        debug!("All form handles dropped");
                        inputs_open = false;
                        if in_flight {
                            continue;
                        }
                        break;
                    }
                },
                Some(event) = done_rx.recv() => {
                    in_flight = false;
                    event
                }
            };

            debug!("Form event: {:?}", event);
            if let Some(command) = form.dispatch(event) {
                match command {
                    Command::Authenticate(params) => {
                        in_flight = true;
                        let authentication = Arc::clone(&authentication);
                        let done = done_tx.clone();
                        tokio::spawn(async move {
                            let call = async move { authentication.auth(params).await };
                            let outcome = tokio::spawn(call).await;
                            let event = match outcome {
                                Ok(Ok(account)) => FormEvent::AuthSucceeded(account),
                                Ok(Err(e)) => FormEvent::AuthFailed(e.to_string()),
                                Err(e) => {
                                    error!("Authentication task failed: {}", e);
                                    FormEvent::AuthFailed(AuthError::Unexpected.to_string())
                                }
                            };
                            let _ = done.send(event);
                        });
                    }
                    Command::PersistToken { key, value } => {
                        if let Err(e) = storage.set(key, &value).await {
                            form.dispatch(FormEvent::PersistFailed(e.to_string()));
                        } else {
                            info!("Stored {}", key);
                        }
                    }
                }
            }

            view_tx.send_replace(form.view());

            if form.state().phase() == FormPhase::Succeeded {
                break;
            }
            if !inputs_open && !in_flight {
                break;
            }
        }

        form.into_state()
    }
}
