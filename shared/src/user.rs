use crate::validation::FormValues;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Data sent to the users resource to create a new user
#[derive(Clone, Debug, Serialize)]
pub struct NewUser {
	pub name: String,
	pub email: String,
	pub password: String,
}

impl From<FormValues> for NewUser {
	fn from(values: FormValues) -> Self {
		Self {
			name: values.name,
			email: values.email,
			password: values.password,
		}
	}
}

/// A user record as the users resource returns it. The resource echoes the submitted name and email and adds an ID
/// and a creation timestamp; the timestamp is only present on creation responses.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct User {
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub email: String,
	#[serde(default, rename = "createdAt")]
	pub created_at: Option<DateTime<Utc>>,
}
