use dioxus::prelude::*;
use expense_api::prelude::*;
use expense_api::validate;

use crate::Route;
use crate::components::Header;
use crate::error::ErrorNotice;
use crate::error::UiError;
use crate::stores::session::SESSION_STORE;

#[component]
pub fn SignupView() -> Element {
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut name_error = use_signal(|| None::<String>);
    let mut email_error = use_signal(|| None::<String>);
    let mut password_error = use_signal(|| None::<String>);
    let mut confirm_error = use_signal(|| None::<String>);
    let mut status = use_signal(|| None::<UiError>);
    let mut is_loading = use_signal(|| false);

    // already-authenticated visitors go straight to the dashboard
    use_effect(move || {
        if SESSION_STORE.read().is_authenticated() {
            navigator.replace(Route::DashboardView);
        }
    });

    let handle_signup = move |_| {
        let name_val = name.read().trim().to_string();
        let email_val = email.read().trim().to_string();
        let password_val = password.read().clone();
        let confirm_val = confirm_password.read().clone();

        let name_err = validate::name(&name_val);
        let email_err = validate::email(&email_val);
        let password_err = validate::password(&password_val);
        let confirm_err = validate::confirm_password(&password_val, &confirm_val);
        name_error.set(name_err.clone());
        email_error.set(email_err.clone());
        password_error.set(password_err.clone());
        confirm_error.set(confirm_err.clone());
        if name_err.is_some()
            || email_err.is_some()
            || password_err.is_some()
            || confirm_err.is_some()
        {
            return;
        }

        spawn(async move {
            is_loading.set(true);
            status.set(None);

            let api = ExpenseApi::default();
            match api
                .register(RegisterRequest {
                    name: name_val,
                    email: email_val,
                    password: password_val,
                })
                .await
            {
                // account created; no session until the user logs in
                Ok(_) => {
                    navigator.push(Route::LoginView);
                }
                Err(e) => status.set(Some(UiError::from_request(e, "Signup failed!"))),
            };

            is_loading.set(false);
        });
    };

    let submit_style = if is_loading() {
        "width: 100%; padding: 12px; background-color: #28a745; color: white; border: none; border-radius: 4px; font-size: 16px; transition: background-color 0.2s; opacity: 0.6; cursor: not-allowed;"
    } else {
        "width: 100%; padding: 12px; background-color: #28a745; color: white; border: none; border-radius: 4px; font-size: 16px; transition: background-color 0.2s; cursor: pointer;"
    };

    rsx! {
        Header {},
        div {
            style: "padding: 40px; max-width: 400px; margin: 0 auto; font-family: Arial, sans-serif;",

            h1 {
                style: "text-align: center; margin-bottom: 30px; color: #333;",
                "Sign Up"
            }

            div {
                style: "margin-bottom: 20px;",
                label {
                    style: "display: block; margin-bottom: 5px; font-weight: bold; color: #555;",
                    "User Name:"
                }
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| {
                        let value = e.value();
                        if validate::name(&value).is_none() {
                            name_error.set(None);
                        }
                        name.set(value);
                    },
                    style: "width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px;",
                    placeholder: "User Name"
                }
                if let Some(msg) = name_error() {
                    p {
                        style: "color: #721c24; font-size: 14px; margin: 4px 0 0;",
                        "{msg}"
                    }
                }
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
                    placeholder: "Email"
                }
                if let Some(msg) = email_error() {
                    p {
                        style: "color: #721c24; font-size: 14px; margin: 4px 0 0;",
                        "{msg}"
                    }
                }
            }

            div {
                style: "margin-bottom: 20px;",
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
                    placeholder: "Password"
                }
                if let Some(msg) = password_error() {
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
                    "Confirm Password:"
                }
                input {
                    r#type: "password",
                    value: "{confirm_password}",
                    oninput: move |e| {
                        let value = e.value();
                        if validate::confirm_password(&password.read(), &value).is_none() {
                            confirm_error.set(None);
                        }
                        confirm_password.set(value);
                    },
                    style: "width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px;",
                    placeholder: "Confirm Password"
                }
                if let Some(msg) = confirm_error() {
                    p {
                        style: "color: #721c24; font-size: 14px; margin: 4px 0 0;",
                        "{msg}"
                    }
                }
            }

            button {
                onclick: handle_signup,
                disabled: is_loading(),
                style: "{submit_style}",
                { if is_loading() { "Signing up..." } else { "Sign Up" } }
            }

            if let Some(error) = status() {
                div {
                    style: "margin-top: 20px;",
                    ErrorNotice { error }
                }
            }

            p {
                style: "text-align: center; margin-top: 20px; color: #555;",
                "Already have an account? "
                Link { to: Route::LoginView, "Login" }
            }
        }
    }
}
