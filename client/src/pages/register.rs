use crate::api;
use crate::components::user_table::UserTable;
use crate::form::{submit_registration, RegistrationState, SubmitOutcome};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use user_signup_shared::validation::is_valid;
use web_sys::Event as WebEvent;

const TERMS_NOTICE: &str = "Please accept the terms of service";

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let state = RegistrationState::new(ctx);
	let can_submit_signal = create_signal(ctx, false);

	// Recompute submit enablement whenever a field changes. The check itself runs in a spawned task, so the button
	// state can briefly lag the latest keystroke.
	create_effect(ctx, move || {
		let values = state.values();
		spawn_local_scoped(ctx, async move {
			can_submit_signal.set(is_valid(&values));
		});
	});

	let email_error_signal = create_memo(ctx, move || state.errors.get().email);
	let password_error_signal = create_memo(ctx, move || state.errors.get().password);
	let terms_error_signal = create_memo(ctx, move || state.errors.get().terms);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		spawn_local_scoped(ctx, async move {
			let outcome = submit_registration(&state, api::create_user).await;
			if outcome == SubmitOutcome::TermsNotAccepted {
				let window = web_sys::window().expect("Failed to get browser window context");
				if window.alert_with_message(TERMS_NOTICE).is_err() {
					log::error!("Failed to raise the terms acceptance notice");
				}
			}
		});
	};

	view! {
		ctx,
		div(class="registration") {
			form(id="registration_form", on:submit=form_submission_handler) {
				div(class="input_with_message") {
					label(for="name") { "Name and Surname:" }
					input(type="text", id="name", name="name", bind:value=state.name)
				}
				div(class="input_with_message") {
					label(for="email") { "Email:" }
					input(type="email", id="email", name="email", bind:value=state.email, class=if email_error_signal.get().is_empty() { "" } else { "error" })
					(if email_error_signal.get().is_empty() {
						view! { ctx, }
					} else {
						view! {
							ctx,
							span(class="input_error") { (*email_error_signal.get()) }
						}
					})
				}
				div(class="input_with_message") {
					label(for="password") { "Password:" }
					input(type="password", id="password", name="password", bind:value=state.password, class=if password_error_signal.get().is_empty() { "" } else { "error" })
					(if password_error_signal.get().is_empty() {
						view! { ctx, }
					} else {
						view! {
							ctx,
							span(class="input_error") { (*password_error_signal.get()) }
						}
					})
				}
				div(class="input_with_message") {
					input(type="checkbox", id="agree", name="agree", bind:checked=state.terms_accepted)
					label(for="agree") { "I accept the terms of service" }
					(if terms_error_signal.get().is_empty() {
						view! { ctx, }
					} else {
						view! {
							ctx,
							span(class="input_error") { (*terms_error_signal.get()) }
						}
					})
				}
				div(class="form_submit") {
					button(type="submit", disabled=!*state.terms_accepted.get() || !*can_submit_signal.get()) { "Gönder" }
				}
			}
			(if state.users.get().is_empty() {
				view! { ctx, }
			} else {
				view! { ctx, UserTable(users=state.users) }
			})
		}
	}
}
