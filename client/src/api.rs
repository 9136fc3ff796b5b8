use gloo_net::http::Request;
use std::fmt;
use user_signup_shared::user::{NewUser, User};

/// The remote resource new user records are posted to
pub const USERS_ENDPOINT: &str = "https://reqres.in/api/users";

/// Errors that can occur when creating a user over the network
#[derive(Debug)]
pub enum ApiError {
	Request(gloo_net::Error),
	Status(u16),
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Request(error) => write!(f, "{}", error),
			Self::Status(status) => write!(f, "The server responded with status {}", status),
		}
	}
}

impl From<gloo_net::Error> for ApiError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error)
	}
}

/// Posts a new user record to the users resource and returns the record the server created.
///
/// # Errors
///
/// Errors occur when the request can't be serialized or sent, when the server answers with a non-success status,
/// and when the response body can't be deserialized as a user record.
pub async fn create_user(new_user: NewUser) -> Result<User, ApiError> {
	let response = Request::post(USERS_ENDPOINT).json(&new_user)?.send().await?;
	if !response.ok() {
		return Err(ApiError::Status(response.status()));
	}
	Ok(response.json().await?)
}
