use sycamore::prelude::*;
use user_signup_shared::user::User;

#[derive(Prop)]
pub struct UserTableProps<'a> {
	pub users: &'a ReadSignal<Vec<User>>,
}

/// Table of the users created this session, in the order they were created, with 1-based row numbers.
#[component]
pub fn UserTable<'a, G: Html>(ctx: Scope<'a>, props: UserTableProps<'a>) -> View<G> {
	let numbered_users = create_memo(ctx, move || {
		props
			.users
			.get()
			.iter()
			.cloned()
			.enumerate()
			.map(|(index, user)| (index + 1, user))
			.collect::<Vec<(usize, User)>>()
	});

	view! {
		ctx,
		div(class="user_table") {
			h2 { "Users:" }
			table {
				thead {
					tr {
						th { "#" }
						th { "Name" }
						th { "Email" }
					}
				}
				tbody {
					Indexed(
						iterable=numbered_users,
						view=|ctx, (row_number, user)| {
							view! {
								ctx,
								tr {
									td { (row_number) }
									td { (user.name) }
									td { (user.email) }
								}
							}
						}
					)
				}
			}
		}
	}
}
