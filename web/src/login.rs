use dioxus::prelude::*;
use expense_api::prelude::*;
use expense_api::validate;

use crate::Route;
use crate::components::Header;
use crate::error::ErrorNotice;
use crate::error::UiError;
use crate::stores::session::SESSION_STORE;

#[component]
pub fn LoginView() -> Element {
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| None::<String>);
    let mut password_error = use_signal(|| None::<String>);
    let mut status = use_signal(|| None::<UiError>);
    let mut is_loading = use_signal(|| false);

    // already-authenticated visitors go straight to the dashboard
    use_effect(move || {
        if SESSION_STORE.read().is_authenticated() {
            navigator.replace(Route::DashboardView);
        }
    });

    let handle_login = move |_| {
        let email_val = email.read().trim().to_string();
        let password_val = password.read().clone();

        let email_err = validate::email(&email_val);
        let password_err = validate::password(&password_val);
        email_error.set(email_err.clone());
        password_error.set(password_err.clone());
        if email_err.is_some() || password_err.is_some() {
            return;
        }

        spawn(async move {
            is_loading.set(true);
            status.set(None);

            let api = ExpenseApi::default();
            match api
                .login(LoginRequest {
                    email: email_val,
                    password: password_val,
                })
                .await
            {
                Ok(login) => {
                    SESSION_STORE
                        .write()
                        .set_session(login.token, login.user.name);
                    navigator.push(Route::DashboardView);
                }
                Err(e) => status.set(Some(UiError::from_request(e, "Login failed!"))),
            };

            is_loading.set(false);
        });
    };

    let submit_style = if is_loading() {
        "width: 100%; padding: 12px; background-color: #007bff; color: white; border: none; border-radius: 4px; font-size: 16px; transition: background-color 0.2s; opacity: 0.6; cursor: not-allowed;"
    } else {
        "width: 100%; padding: 12px; background-color: #007bff; color: white; border: none; border-radius: 4px; font-size: 16px; transition: background-color 0.2s; cursor: pointer;"
    };

    rsx! {
        Header {},
        div {
            style: "padding: 40px; max-width: 400px; margin: 0 auto; font-family: Arial, sans-serif;",

            h1 {
                style: "text-align: center; margin-bottom: 10px; color: #333;",
                "User Login"
            }
            p {
                style: "text-align: center; color: #555; margin-bottom: 30px;",
                "Track your expenses, analyze your spending, and manage your finances effortlessly."
            }

            div {
                style: "margin-bottom: 20px;",
                label {
                    style: "display: block; margin-bottom: 5px; font-weight: bold; color: #555;",
                    "Email:"
                }
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| {
                        let value = e.value();
                        if validate::email(value.trim()).is_none() {
                            email_error.set(None);
                        }
                        email.set(value);
                    },
                    style: "width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px;",
                    placeholder: "Enter your email"
                }
                if let Some(msg) = email_error() {
                    p {
                        style: "color: #721c24; font-size: 14px; margin: 4px 0 0;",
                        "{msg}"
                    }
                }
            }

            div {
                style: "margin-bottom: 30px;",
                label {
                    style: "display: block; margin-bottom: 5px; font-weight: bold; color: #555;",
                    "Password:"
                }
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| {
                        let value = e.value();
                        if validate::password(&value).is_none() {
                            password_error.set(None);
                        }
                        password.set(value);
                    },
                    style: "width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px;",
                    placeholder: "Enter your password"
                }
                if let Some(msg) = password_error() {
                    p {
                        style: "color: #721c24; font-size: 14px; margin: 4px 0 0;",
                        "{msg}"
                    }
                }
            }

            button {
                onclick: handle_login,
                disabled: is_loading(),
                style: "{submit_style}",
                { if is_loading() { "Logging in..." } else { "Login" } }
            }

            if let Some(error) = status() {
                div {
                    style: "margin-top: 20px;",
                    ErrorNotice { error }
                }
            }

            p {
                style: "text-align: center; margin-top: 20px; color: #555;",
                "Don't have an account? "
                Link { to: Route::SignupView, "Signup" }
            }
        }
    }
}
