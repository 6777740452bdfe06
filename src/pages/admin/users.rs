//! Users Table
//!
//! Every account with a suspend action for active non-admin users.

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{or_dash, title_case, ApiError, User, UserStatus};

use crate::api;
use crate::components::{ConfirmButton, StatusBadge};
use crate::context::use_app;
use crate::pages::loadable::{load, table_body, Loadable};

fn suspend_error(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(msg) => format!("Failed to suspend user: {}", msg),
        _ => "An error occurred while suspending the user.".to_string(),
    }
}

/// Mark one user suspended in an already loaded list
fn mark_suspended(rows: &mut Loadable<Vec<User>>, user_id: i64) {
    if let Loadable::Ready(users) = rows {
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.status = UserStatus::Suspended;
        }
    }
}

#[component]
pub fn UsersTable() -> impl IntoView {
    let ctx = use_app();
    let state = load("users", api::users);

    let suspend = move |user_id: i64| {
        spawn_local(async move {
            match api::suspend_user(user_id).await {
                Ok(_) => {
                    ctx.notify("User suspended successfully.");
                    state.update(|rows| mark_suspended(rows, user_id));
                }
                Err(e) => {
                    log::error!("Error suspending user #{}: {}", user_id, e);
                    ctx.error(suspend_error(&e));
                }
            }
        });
    };

    view! {
        <div class="card">
            <div class="card-header"><h5 class="mb-0">"Users"</h5></div>
            <div class="table-responsive">
                <table class="table table-hover align-middle mb-0">
                    <thead class="table-light">
                        <tr>
                            <th>"#"</th>
                            <th>"Username"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Account Type"</th>
                            <th>"Status"</th>
                            <th>"Joined"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {table_body(state, 8, "No users found.", move |n, user| {
                            let id = user.id;
                            let action = if user.account_type == "admin" {
                                view! { <span class="text-muted small">"Admin Account"</span> }.into_any()
                            } else if user.can_suspend() {
                                view! {
                                    <ConfirmButton
                                        label="Suspend"
                                        button_class="btn btn-danger btn-sm"
                                        prompt="Are you sure you want to suspend this account?"
                                        on_confirm=move |_| suspend(id)
                                    />
                                }.into_any()
                            } else {
                                view! { <button class="btn btn-secondary btn-sm" disabled>"Suspended"</button> }.into_any()
                            };
                            view! {
                                <tr>
                                    <td>{n}</td>
                                    <td><div class="fw-bold">{user.username.clone()}</div></td>
                                    <td>{user.email.clone()}</td>
                                    <td>{or_dash(user.phone.as_deref())}</td>
                                    <td>{title_case(&user.account_type)}</td>
                                    <td><StatusBadge badge=user.status.badge()/></td>
                                    <td>{or_dash(user.created_at.as_deref())}</td>
                                    <td>{action}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, account_type: &str) -> User {
        User {
            id,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            phone: None,
            account_type: account_type.to_string(),
            status: UserStatus::Active,
            created_at: None,
        }
    }

    #[test]
    fn test_mark_suspended_only_touches_target() {
        let mut rows = Loadable::Ready(vec![user(1, "customer"), user(2, "provider")]);
        mark_suspended(&mut rows, 2);
        let Loadable::Ready(users) = rows else { panic!("rows should stay loaded") };
        assert_eq!(users[0].status, UserStatus::Active);
        assert_eq!(users[1].status, UserStatus::Suspended);
        assert!(!users[1].can_suspend());
    }

    #[test]
    fn test_suspend_error_text() {
        assert_eq!(suspend_error(&ApiError::Rejected("User not found".into())), "Failed to suspend user: User not found");
        assert_eq!(suspend_error(&ApiError::Status(500)), "An error occurred while suspending the user.");
    }
}
