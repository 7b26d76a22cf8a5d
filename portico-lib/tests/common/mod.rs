//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use portico_lib::auth::{AccountModel, Authentication, AuthenticationParams};
use portico_lib::error::{AuthError, StorageError};
use portico_lib::storage::Storage;
use portico_validation::Validation;

pub const ACCESS_TOKEN: &str = "access-token-1234";
pub const EMAIL: &str = "ana.silva@example.com";
pub const PASSWORD: &str = "correct horse";

/// Validation returning the same message for every field.
#[derive(Debug, Default)]
pub struct ValidationStub {
    pub error_message: Option<String>,
}

impl ValidationStub {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            error_message: Some(message.to_string()),
        }
    }
}

impl Validation for ValidationStub {
    fn validate(&self, _field_name: &str, _value: &str) -> Option<String> {
        self.error_message.clone()
    }
}

/// Authentication recording its calls.
///
/// Succeeds with [`ACCESS_TOKEN`] unless a failure was queued with
/// [`fail_once`](Self::fail_once).
#[derive(Debug, Default)]
pub struct AuthenticationSpy {
    calls: AtomicUsize,
    params: Mutex<Option<AuthenticationParams>>,
    failure: Mutex<Option<AuthError>>,
}

impl AuthenticationSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_once(&self, error: AuthError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn params(&self) -> Option<AuthenticationParams> {
        self.params.lock().unwrap().clone()
    }
}

#[async_trait]
impl Authentication for AuthenticationSpy {
    async fn auth(&self, params: AuthenticationParams) -> Result<AccountModel, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.params.lock().unwrap() = Some(params);
        match self.failure.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(AccountModel::new(ACCESS_TOKEN)),
        }
    }
}

/// Storage recording every `set`.
#[derive(Debug, Default)]
pub struct StorageSpy {
    sets: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl StorageSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sets(&self) -> Vec<(String, String)> {
        self.sets.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for StorageSpy {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.sets
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        if self.fail {
            return Err(StorageError::Backend("disk full".to_string()));
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .sets
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
