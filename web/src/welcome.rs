use dioxus::prelude::*;

use crate::Route;
use crate::components::Header;
use crate::stores::session::SESSION_STORE;

const FEATURES: [(&str, &str); 4] = [
    (
        "Track Expenses",
        "Easily log daily expenses and keep track of your spending habits.",
    ),
    (
        "Visual Reports",
        "View insightful charts and graphs to analyze your financial trends.",
    ),
    (
        "Set Budgets",
        "Create and manage budgets to control your spending effectively.",
    ),
    (
        "Secure Storage",
        "Your financial data is encrypted and securely stored for privacy.",
    ),
];

#[component]
pub fn WelcomeView() -> Element {
    let authenticated = SESSION_STORE.read().is_authenticated();

    rsx! {
        Header {},
        div {
            style: "padding: 60px 40px 20px; text-align: center; font-family: Arial, sans-serif;",
            h2 {
                style: "font-size: 2.5rem; font-weight: bold; color: #0b3d4e; margin: 0;",
                "Welcome To Expense Manager"
            }
            p {
                style: "font-size: 1.2rem; color: #b38f00; margin: 8px 0;",
                "Manage • Visualize • Analyze"
            }
            if authenticated {
                p {
                    style: "font-size: 1.1rem; margin-bottom: 20px;",
                    "Welcome back 👋, seems you are already logged in. Click below to access the dashboard."
                }
                Link { to: Route::DashboardView,
                    button {
                        style: "padding: 12px 24px; background-color: #28a745; color: white; border: none; border-radius: 4px; font-size: 16px; cursor: pointer;",
                        "Continue"
                    }
                }
            } else {
                p {
                    style: "font-size: 1.1rem; margin-bottom: 20px;",
                    "Login or signup to continue."
                }
                div {
                    style: "display: flex; flex-direction: row; justify-content: center; gap: 10px;",
                    Link { to: Route::LoginView,
                        button {
                            style: "padding: 12px 24px; background-color: #007bff; color: white; border: none; border-radius: 4px; font-size: 16px; cursor: pointer;",
                            "Login"
                        }
                    }
                    Link { to: Route::SignupView,
                        button {
                            style: "padding: 12px 24px; background-color: #dc3545; color: white; border: none; border-radius: 4px; font-size: 16px; cursor: pointer;",
                            "Signup"
                        }
                    }
                }
            }
        }
        div {
            style: "padding: 40px; font-family: Arial, sans-serif;",
            h4 {
                style: "text-align: center; font-weight: bold; color: #333;",
                "Features of Expense Manager"
            }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; justify-content: center; gap: 20px; margin-top: 20px;",
                for (title, text) in FEATURES {
                    div {
                        key: "{title}",
                        style: "max-width: 240px; padding: 20px; background-color: white; border: 1px solid #ddd; border-radius: 10px; text-align: center; box-shadow: 0 1px 4px rgba(0,0,0,0.1);",
                        h5 {
                            style: "font-size: 1.2rem; font-weight: bold; color: #0b3d4e; margin: 0 0 8px;",
                            "{title}"
                        }
                        p {
                            style: "font-size: 1rem; color: #555; margin: 0;",
                            "{text}"
                        }
                    }
                }
            }
        }
    }
}
