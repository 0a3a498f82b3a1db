use crate::api::single_flight::SingleFlight;
use crate::config::AppConfig;
use crate::domain::billing::SubscriptionDetails;
use crate::domain::draft::ListingDraft;
use crate::domain::listing::{Listing, ListingCategory};
use crate::domain::user::{AuthUser, SignupRequest};
use crate::errors::ServerError;
use crate::search::FilterState;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use url::form_urlencoded;

/// Everything the pages need from the remote API. Handlers talk to
/// this trait so router tests can swap in a stub.
pub trait RentalsApi: Send + Sync {
    /// One category feed (or the combined feed). The active filters
    /// are mirrored into the query string; the full pipeline still
    /// runs locally on whatever comes back.
    fn listings(
        &self,
        category: Option<ListingCategory>,
        filters: &FilterState,
    ) -> Result<Vec<Listing>, ServerError>;
    fn featured_listings(&self) -> Result<Vec<Listing>, ServerError>;
    fn listing(&self, id: u64) -> Result<Listing, ServerError>;
    /// Owner-gated fetch for the edit form.
    fn listing_for_edit(&self, id: u64, user_id: u64) -> Result<Listing, ServerError>;
    fn create_listing(&self, draft: &ListingDraft) -> Result<(), ServerError>;
    fn update_listing(&self, id: u64, draft: &ListingDraft) -> Result<(), ServerError>;

    fn login(&self, email: &str, password: &str) -> Result<AuthUser, ServerError>;
    fn signup(&self, signup: &SignupRequest) -> Result<AuthUser, ServerError>;
    fn profile(&self, user_id: u64) -> Result<AuthUser, ServerError>;
    fn update_profile(&self, user: &AuthUser) -> Result<AuthUser, ServerError>;
    fn change_password(&self, user_id: u64, current: &str, new: &str) -> Result<(), ServerError>;

    fn checkout_session(&self, user_id: u64, listing_id: u64) -> Result<String, ServerError>;
    fn subscription_details(
        &self,
        listing_id: u64,
        user_id: u64,
    ) -> Result<SubscriptionDetails, ServerError>;
    fn cancel_subscription(&self, listing_id: u64, user_id: u64) -> Result<(), ServerError>;
    fn portal_session(&self, user_id: u64) -> Result<String, ServerError>;

    fn pending_listings(&self) -> Result<Vec<Listing>, ServerError>;
    fn approve_listing(&self, id: u64) -> Result<(), ServerError>;
    fn reject_listing(&self, id: u64) -> Result<(), ServerError>;
}

// Wire envelopes. The API wraps its payloads one level deep.

#[derive(Deserialize)]
struct ListingsEnvelope {
    #[serde(default)]
    listings: Vec<Listing>,
}

#[derive(Deserialize)]
struct ListingEnvelope {
    listing: Listing,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct UrlEnvelope {
    url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Blocking reqwest client against the listings API. Every request
/// carries the configured timeout, which is also the cancellation
/// story: a stale page load stops burning a worker at the deadline.
pub struct HttpApi {
    client: reqwest::blocking::Client,
    base_url: String,
    feed_flights: SingleFlight<Vec<Listing>>,
    detail_flights: SingleFlight<Listing>,
}

impl HttpApi {
    pub fn new(config: &AppConfig) -> Result<Self, ServerError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| ServerError::Network(format!("build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            feed_flights: SingleFlight::new(),
            detail_flights: SingleFlight::new(),
        })
    }

    fn get<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ServerError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!(%url, "GET upstream");
        let response = self.client.get(&url).send().map_err(request_error)?;
        read_json(response)
    }

    fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ServerError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST upstream");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(request_error)?;
        read_json(response)
    }

    fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ServerError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "PUT upstream");
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .map_err(request_error)?;
        read_json(response)
    }
}

impl RentalsApi for HttpApi {
    fn listings(
        &self,
        category: Option<ListingCategory>,
        filters: &FilterState,
    ) -> Result<Vec<Listing>, ServerError> {
        let path = listings_path(category, filters);
        self.feed_flights.run(&path, || {
            self.get::<ListingsEnvelope>(&path)
                .map(|envelope| envelope.listings)
        })
    }

    fn featured_listings(&self) -> Result<Vec<Listing>, ServerError> {
        let path = "/listings/featured/";
        self.feed_flights.run(path, || {
            self.get::<ListingsEnvelope>(path)
                .map(|envelope| envelope.listings)
        })
    }

    fn listing(&self, id: u64) -> Result<Listing, ServerError> {
        let path = format!("/listings/{id}/");
        let result = self.detail_flights.run(&path, || {
            self.get::<ListingEnvelope>(&path)
                .map(|envelope| envelope.listing)
        });
        match result {
            Err(ServerError::Upstream { status: 404, .. }) => Err(ServerError::NotFound),
            other => other,
        }
    }

    fn listing_for_edit(&self, id: u64, user_id: u64) -> Result<Listing, ServerError> {
        let path = format!("/listings/edit/{id}/?user_id={user_id}");
        match self
            .get::<ListingEnvelope>(&path)
            .map(|envelope| envelope.listing)
        {
            Err(ServerError::Upstream { status: 404, .. }) => Err(ServerError::NotFound),
            Err(ServerError::Upstream {
                status: 403,
                message,
            }) => Err(ServerError::Forbidden(message)),
            other => other,
        }
    }

    fn create_listing(&self, draft: &ListingDraft) -> Result<(), ServerError> {
        self.post::<serde_json::Value, _>("/listings/create/", draft)
            .map(|_| ())
    }

    fn update_listing(&self, id: u64, draft: &ListingDraft) -> Result<(), ServerError> {
        let path = format!("/listings/update/{id}/");
        self.put::<serde_json::Value, _>(&path, draft).map(|_| ())
    }

    fn login(&self, email: &str, password: &str) -> Result<AuthUser, ServerError> {
        let body = json!({ "email": email, "password": password });
        match self.post::<UserEnvelope, _>("/users/login/", &body) {
            Ok(envelope) => Ok(envelope.user),
            Err(ServerError::Upstream {
                status: 401,
                message,
            }) => Err(ServerError::Unauthorized(message)),
            Err(ServerError::Upstream {
                status: 403,
                message,
            }) => Err(ServerError::Forbidden(message)),
            Err(other) => Err(other),
        }
    }

    fn signup(&self, signup: &SignupRequest) -> Result<AuthUser, ServerError> {
        self.post::<UserEnvelope, _>("/users/signup/", signup)
            .map(|envelope| envelope.user)
    }

    fn profile(&self, user_id: u64) -> Result<AuthUser, ServerError> {
        let path = format!("/users/get-profile/?userId={user_id}");
        self.get::<UserEnvelope>(&path).map(|envelope| envelope.user)
    }

    fn update_profile(&self, user: &AuthUser) -> Result<AuthUser, ServerError> {
        // This endpoint reads camelCase keys, unlike login.
        let body = json!({
            "userId": user.id,
            "firstName": user.first_name,
            "lastName": user.last_name,
            "username": user.username,
            "contactNumber": user.contact_number,
            "company": user.company,
        });
        self.post::<UserEnvelope, _>("/users/update-profile/", &body)
            .map(|envelope| envelope.user)
    }

    fn change_password(&self, user_id: u64, current: &str, new: &str) -> Result<(), ServerError> {
        let body = json!({
            "userId": user_id,
            "oldPassword": current,
            "newPassword": new,
        });
        self.post::<serde_json::Value, _>("/users/change-password/", &body)
            .map(|_| ())
    }

    fn checkout_session(&self, user_id: u64, listing_id: u64) -> Result<String, ServerError> {
        let body = json!({
            "user_id": user_id,
            "listing_id": listing_id,
            "type": "standard",
        });
        self.post::<UrlEnvelope, _>("/payments/create-checkout-session/", &body)
            .map(|envelope| envelope.url)
    }

    fn subscription_details(
        &self,
        listing_id: u64,
        user_id: u64,
    ) -> Result<SubscriptionDetails, ServerError> {
        let path =
            format!("/payments/subscription-details/?listing_id={listing_id}&user_id={user_id}");
        self.get(&path)
    }

    fn cancel_subscription(&self, listing_id: u64, user_id: u64) -> Result<(), ServerError> {
        let body = json!({ "listing_id": listing_id, "user_id": user_id });
        self.post::<serde_json::Value, _>("/payments/cancel-subscription/", &body)
            .map(|_| ())
    }

    fn portal_session(&self, user_id: u64) -> Result<String, ServerError> {
        let body = json!({ "user_id": user_id });
        self.post::<UrlEnvelope, _>("/payments/create-portal-session/", &body)
            .map(|envelope| envelope.url)
    }

    fn pending_listings(&self) -> Result<Vec<Listing>, ServerError> {
        self.get::<ListingsEnvelope>("/listings/pending/")
            .map(|envelope| envelope.listings)
    }

    fn approve_listing(&self, id: u64) -> Result<(), ServerError> {
        let path = format!("/listings/{id}/approve/");
        self.post::<serde_json::Value, _>(&path, &json!({}))
            .map(|_| ())
    }

    fn reject_listing(&self, id: u64) -> Result<(), ServerError> {
        let path = format!("/listings/{id}/reject/");
        self.post::<serde_json::Value, _>(&path, &json!({}))
            .map(|_| ())
    }
}

/// Feed path plus the mirrored filter parameters.
fn listings_path(category: Option<ListingCategory>, filters: &FilterState) -> String {
    let base = category.map_or("/listings/", ListingCategory::api_path);
    let pairs = filters.to_pairs();
    if pairs.is_empty() {
        return base.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{base}?{query}")
}

fn request_error(err: reqwest::Error) -> ServerError {
    if err.is_timeout() {
        ServerError::Network("upstream request timed out".to_string())
    } else {
        ServerError::Network(err.to_string())
    }
}

fn read_json<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T, ServerError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|e| ServerError::Network(format!("read upstream response: {e}")))?;
    parse_response(status, &body)
}

/// Splits the HTTP outcome: 2xx bodies decode into `T`, everything
/// else becomes `Upstream` carrying the body's `error` field when
/// there is one.
fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ServerError> {
    if (200..300).contains(&status) {
        serde_json::from_str(body)
            .map_err(|e| ServerError::Network(format!("decode upstream response: {e}")))
    } else {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .unwrap_or_else(|| format!("upstream returned status {status}"));
        Err(ServerError::Upstream { status, message })
    }
}
