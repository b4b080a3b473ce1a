//! Shared helpers for gateway integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServiceResponse;
use actix_web::{App, test, web};
use async_trait::async_trait;
use marketplace::Trace;
use marketplace::domain::ports::{
    RemoteRequest, RemoteResponse, RemoteTransport, RemoteTransportError,
};
use marketplace::inbound::http::state::HttpState;
use marketplace::inbound::http::{analytics, coupons, json_config, submissions};
use serde_json::Value;

/// Remote transport double replaying scripted answers and recording every
/// request it receives.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    answers: Arc<Mutex<VecDeque<Result<RemoteResponse, RemoteTransportError>>>>,
    requests: Arc<Mutex<Vec<RemoteRequest>>>,
}

impl RecordingTransport {
    /// Queue a remote answer with `status` and `body`.
    pub fn answer(self, status: u16, body: Value) -> Self {
        self.answers
            .lock()
            .expect("answers lock")
            .push_back(Ok(RemoteResponse { status, body }));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, error: RemoteTransportError) -> Self {
        self.answers
            .lock()
            .expect("answers lock")
            .push_back(Err(error));
        self
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl RemoteTransport for RecordingTransport {
    async fn send(&self, request: RemoteRequest) -> Result<RemoteResponse, RemoteTransportError> {
        self.requests.lock().expect("requests lock").push(request);
        self.answers
            .lock()
            .expect("answers lock")
            .pop_front()
            .unwrap_or_else(|| Err(RemoteTransportError::transport("no scripted answer")))
    }
}

/// Serve `req` through the full `/api/v1` surface backed by `transport`.
pub async fn call_gateway(
    transport: &RecordingTransport,
    req: test::TestRequest,
) -> ServiceResponse {
    let state = web::Data::new(HttpState::from_transport(Arc::new(transport.clone())));
    let app = test::init_service(
        App::new()
            .app_data(state)
            .app_data(json_config())
            .wrap(Trace)
            .service(
                web::scope("/api/v1")
                    .service(coupons::list_coupons)
                    .service(coupons::create_coupon)
                    .service(coupons::apply_coupon)
                    .service(coupons::delete_coupon)
                    .service(analytics::admin_analytics)
                    .service(analytics::vendor_analytics)
                    .service(submissions::create_ticket)
                    .service(submissions::apply_as_vendor)
                    .service(submissions::update_profile)
                    .service(submissions::add_wishlist_item)
                    .service(submissions::request_payout)
                    .service(submissions::validate_payload),
            ),
    )
    .await;
    test::call_service(&app, req.to_request()).await
}
