//
//  booker-client
//  api/testing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! In-memory transport and token providers for unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::client::BookerClient;
use super::common::BookerError;
use super::request::{HttpMethod, Params};
use super::transport::Transport;
use crate::auth::{AccessTokenProvider, StaticToken};

/// A call seen by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: HttpMethod,
    pub path: String,
    pub params: Value,
}

/// Records every call and answers with a canned body.
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    reply: Value,
}

impl RecordingTransport {
    pub fn replying(reply: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply,
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn only_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }

    fn record(&self, method: HttpMethod, path: &str, params: &Params) -> Value {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            params: Value::Object(params.as_map().clone()),
        });
        self.reply.clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, path: &str, params: &Params) -> Result<Value, BookerError> {
        Ok(self.record(HttpMethod::Post, path, params))
    }

    async fn get(&self, path: &str, params: &Params) -> Result<Value, BookerError> {
        Ok(self.record(HttpMethod::Get, path, params))
    }
}

/// Provider that can never produce a token.
pub struct FailingAuth;

#[async_trait]
impl AccessTokenProvider for FailingAuth {
    async fn access_token(&self) -> Result<String, BookerError> {
        Err(BookerError::Authentication("token rejected".to_string()))
    }
}

/// Client over `transport` that authenticates with the token `access_token`.
pub fn client_with(transport: Arc<RecordingTransport>) -> BookerClient {
    BookerClient::new(transport, Arc::new(StaticToken::new("access_token").unwrap()))
}
