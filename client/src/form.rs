use crate::api::ApiError;
use std::future::Future;
use sycamore::prelude::*;
use user_signup_shared::user::{NewUser, User};
use user_signup_shared::validation::{validate_all, FormErrors, FormValues};

/// All of the state owned by one registration form session: the current field values, the per-field error map, and
/// the list of users created so far.
#[derive(Clone, Copy)]
pub struct RegistrationState<'a> {
	pub name: &'a Signal<String>,
	pub email: &'a Signal<String>,
	pub password: &'a Signal<String>,
	pub terms_accepted: &'a Signal<bool>,
	pub errors: &'a Signal<FormErrors>,
	pub users: &'a Signal<Vec<User>>,
}

impl<'a> RegistrationState<'a> {
	pub fn new(ctx: Scope<'a>) -> Self {
		Self {
			name: create_signal(ctx, String::new()),
			email: create_signal(ctx, String::new()),
			password: create_signal(ctx, String::new()),
			terms_accepted: create_signal(ctx, false),
			errors: create_signal(ctx, FormErrors::default()),
			users: create_signal(ctx, Vec::new()),
		}
	}

	/// Snapshot of the current field values
	pub fn values(&self) -> FormValues {
		FormValues {
			name: (*self.name.get()).clone(),
			email: (*self.email.get()).clone(),
			password: (*self.password.get()).clone(),
			terms_accepted: *self.terms_accepted.get(),
		}
	}

	fn clear_fields(&self) {
		self.name.set(String::new());
		self.email.set(String::new());
		self.password.set(String::new());
		self.terms_accepted.set(false);
	}
}

/// How one submission attempt ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	/// The terms checkbox wasn't ticked; nothing else was checked and the error map was left alone.
	TermsNotAccepted,
	/// Validation failed; the error map was replaced with the new violations.
	Invalid,
	/// The server created the user; the record was appended and the form reset.
	Submitted,
	/// The network call failed; the form contents were left alone.
	Failed,
}

/// Runs one submission attempt: the terms gate first, then full validation, then the network call. The send function
/// is only invoked once the form passed validation. A failed send is reported to the log only; the entered values
/// stay in place so nothing is lost.
pub async fn submit_registration<'a, Fut>(
	state: &RegistrationState<'a>,
	send_new_user: impl FnOnce(NewUser) -> Fut,
) -> SubmitOutcome
where
	Fut: Future<Output = Result<User, ApiError>>,
{
	let values = state.values();

	if !values.terms_accepted {
		return SubmitOutcome::TermsNotAccepted;
	}

	if let Err(violations) = validate_all(&values) {
		state.errors.set(FormErrors::from_violations(&violations));
		return SubmitOutcome::Invalid;
	}

	match send_new_user(values.into()).await {
		Ok(user) => {
			log::debug!("Created user {}", user.id);
			state.users.modify().push(user);
			state.clear_fields();
			state.errors.set(FormErrors::default());
			SubmitOutcome::Submitted
		}
		Err(error) => {
			log::error!("Failed to create user: {}", error);
			SubmitOutcome::Failed
		}
	}
}
