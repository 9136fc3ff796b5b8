use pages::register::RegistrationView;
use sycamore::prelude::*;

mod api;
mod components;
mod form;
mod pages;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	sycamore::render(|ctx| {
		view! { ctx, RegistrationView }
	});
}
