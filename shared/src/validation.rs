pub const MINIMUM_PASSWORD_LENGTH: usize = 6;

pub const EMAIL_INVALID_MESSAGE: &str = "Email adresinizi girmelisiniz!";
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email adresini lütfen doldurunuz!";
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Şifre Gerekli !";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Minimum 6 Karakter Gerekli";
pub const TERMS_NOT_ACCEPTED_MESSAGE: &str = "Şartları kabul etmelisiniz";

/// Current contents of the registration form fields
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormValues {
	pub name: String,
	pub email: String,
	pub password: String,
	pub terms_accepted: bool,
}

/// Form fields a validation rule can flag
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
	Name,
	Email,
	Password,
	Terms,
}

/// A single validation failure for one field
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError {
	pub field: Field,
	pub message: &'static str,
}

/// Messages for each field of the form. An empty string means the field has no error.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormErrors {
	pub name: &'static str,
	pub email: &'static str,
	pub password: &'static str,
	pub terms: &'static str,
}

impl FormErrors {
	/// Builds a fresh error map from a set of violations. Any previous contents are discarded; fields without a
	/// violation end up with no error.
	pub fn from_violations(violations: &[FieldError]) -> Self {
		let mut errors = Self::default();
		for violation in violations {
			match violation.field {
				Field::Name => errors.name = violation.message,
				Field::Email => errors.email = violation.message,
				Field::Password => errors.password = violation.message,
				Field::Terms => errors.terms = violation.message,
			}
		}
		errors
	}

	pub fn is_empty(&self) -> bool {
		self.name.is_empty() && self.email.is_empty() && self.password.is_empty() && self.terms.is_empty()
	}
}

type Rule = fn(&FormValues) -> Option<FieldError>;

// One rule per field, checked in form order.
const RULES: [Rule; 4] = [check_name, check_email, check_password, check_terms];

// The name carries no constraint.
fn check_name(_values: &FormValues) -> Option<FieldError> {
	None
}

fn check_email(values: &FormValues) -> Option<FieldError> {
	if values.email.is_empty() {
		return Some(FieldError {
			field: Field::Email,
			message: EMAIL_REQUIRED_MESSAGE,
		});
	}
	if !is_well_formed_email(&values.email) {
		return Some(FieldError {
			field: Field::Email,
			message: EMAIL_INVALID_MESSAGE,
		});
	}
	None
}

fn check_password(values: &FormValues) -> Option<FieldError> {
	if values.password.is_empty() {
		return Some(FieldError {
			field: Field::Password,
			message: PASSWORD_REQUIRED_MESSAGE,
		});
	}
	if values.password.chars().count() < MINIMUM_PASSWORD_LENGTH {
		return Some(FieldError {
			field: Field::Password,
			message: PASSWORD_TOO_SHORT_MESSAGE,
		});
	}
	None
}

fn check_terms(values: &FormValues) -> Option<FieldError> {
	if values.terms_accepted {
		None
	} else {
		Some(FieldError {
			field: Field::Terms,
			message: TERMS_NOT_ACCEPTED_MESSAGE,
		})
	}
}

fn is_well_formed_email(email: &str) -> bool {
	if email.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = email.rsplit_once('@') else {
		return false;
	};
	if local.is_empty() || domain.is_empty() || local.contains('@') {
		return false;
	}
	if !domain.contains('.') {
		return false;
	}
	domain.split('.').all(|label| !label.is_empty())
}

/// Cheap pass/fail check over the whole form, stopping at the first failing rule. Suitable for recomputing live
/// submit enablement on every field change.
pub fn is_valid(values: &FormValues) -> bool {
	RULES.iter().all(|rule| rule(values).is_none())
}

/// Authoritative check used at submit time. Evaluates every rule and reports all failures together rather than
/// stopping at the first one.
pub fn validate_all(values: &FormValues) -> Result<(), Vec<FieldError>> {
	let violations: Vec<FieldError> = RULES.iter().filter_map(|rule| rule(values)).collect();
	if violations.is_empty() {
		Ok(())
	} else {
		Err(violations)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled_values() -> FormValues {
		FormValues {
			name: String::from("Ada"),
			email: String::from("ada@x.com"),
			password: String::from("secret1"),
			terms_accepted: true,
		}
	}

	#[test]
	fn accepts_a_fully_filled_form() {
		let values = filled_values();
		assert!(validate_all(&values).is_ok());
		assert!(is_valid(&values));
	}

	#[test]
	fn name_carries_no_constraint() {
		let mut values = filled_values();
		values.name = String::new();
		assert!(validate_all(&values).is_ok());
	}

	#[test]
	fn missing_email_gets_the_required_message() {
		let mut values = filled_values();
		values.email = String::new();
		let violations = validate_all(&values).unwrap_err();
		assert_eq!(
			violations,
			vec![FieldError {
				field: Field::Email,
				message: EMAIL_REQUIRED_MESSAGE,
			}]
		);
	}

	#[test]
	fn malformed_email_gets_the_format_message() {
		let mut values = filled_values();
		values.email = String::from("not-an-email");
		let violations = validate_all(&values).unwrap_err();
		assert_eq!(
			violations,
			vec![FieldError {
				field: Field::Email,
				message: EMAIL_INVALID_MESSAGE,
			}]
		);
	}

	#[test]
	fn rejects_malformed_email_shapes() {
		for email in [
			"not-an-email",
			"@x.com",
			"ada@",
			"ada@x",
			"ada @x.com",
			"ada@x .com",
			"ada@.com",
			"ada@x.",
			"ada@x..com",
		] {
			let mut values = filled_values();
			values.email = String::from(email);
			let violations = validate_all(&values).unwrap_err();
			assert!(
				violations.iter().any(|violation| violation.field == Field::Email),
				"expected an email violation for {:?}",
				email
			);
		}
	}

	#[test]
	fn accepts_common_email_shapes() {
		for email in ["ada@x.com", "a.lovelace@mail.example.org", "ada+forms@x.co"] {
			let mut values = filled_values();
			values.email = String::from(email);
			assert!(validate_all(&values).is_ok(), "expected {:?} to pass", email);
		}
	}

	#[test]
	fn missing_and_short_passwords_get_distinct_messages() {
		let mut values = filled_values();
		values.password = String::new();
		let missing = validate_all(&values).unwrap_err();
		assert_eq!(missing[0].message, PASSWORD_REQUIRED_MESSAGE);

		values.password = String::from("12345");
		let short = validate_all(&values).unwrap_err();
		assert_eq!(short[0].message, PASSWORD_TOO_SHORT_MESSAGE);

		assert_ne!(PASSWORD_REQUIRED_MESSAGE, PASSWORD_TOO_SHORT_MESSAGE);
	}

	#[test]
	fn password_length_is_counted_in_characters() {
		let mut values = filled_values();
		values.password = String::from("şifrem");
		assert!(validate_all(&values).is_ok());
	}

	#[test]
	fn unaccepted_terms_fail_validation() {
		let mut values = filled_values();
		values.terms_accepted = false;
		let violations = validate_all(&values).unwrap_err();
		assert_eq!(
			violations,
			vec![FieldError {
				field: Field::Terms,
				message: TERMS_NOT_ACCEPTED_MESSAGE,
			}]
		);
	}

	#[test]
	fn all_violations_are_reported_together() {
		let values = FormValues::default();
		let violations = validate_all(&values).unwrap_err();
		let fields: Vec<Field> = violations.iter().map(|violation| violation.field).collect();
		assert_eq!(fields, vec![Field::Email, Field::Password, Field::Terms]);
	}

	#[test]
	fn the_two_entry_points_agree() {
		let mut samples = vec![FormValues::default(), filled_values()];
		for email in ["", "not-an-email", "ada@x.com"] {
			for password in ["", "12345", "secret1"] {
				for terms_accepted in [false, true] {
					samples.push(FormValues {
						name: String::from("Ada"),
						email: String::from(email),
						password: String::from(password),
						terms_accepted,
					});
				}
			}
		}
		for values in samples {
			assert_eq!(is_valid(&values), validate_all(&values).is_ok(), "disagreement on {:?}", values);
		}
	}

	#[test]
	fn from_violations_discards_previous_contents() {
		let email_only = FormErrors::from_violations(&[FieldError {
			field: Field::Email,
			message: EMAIL_REQUIRED_MESSAGE,
		}]);
		assert_eq!(email_only.email, EMAIL_REQUIRED_MESSAGE);
		assert!(email_only.password.is_empty());
		assert!(email_only.terms.is_empty());

		let password_only = FormErrors::from_violations(&[FieldError {
			field: Field::Password,
			message: PASSWORD_TOO_SHORT_MESSAGE,
		}]);
		assert!(password_only.email.is_empty());
		assert_eq!(password_only.password, PASSWORD_TOO_SHORT_MESSAGE);
	}

	#[test]
	fn empty_violation_set_produces_an_empty_map() {
		assert!(FormErrors::from_violations(&[]).is_empty());
	}
}
