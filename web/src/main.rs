use dioxus::prelude::*;

mod components;
mod dashboard;
mod error;
mod expenses;
mod login;
mod signup;
mod stores;
mod welcome;

use dashboard::DashboardView;
use expenses::ExpensesView;
use login::LoginView;
use signup::SignupView;
use welcome::WelcomeView;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    WelcomeView,
    #[route("/login")]
    LoginView,
    #[route("/signup")]
    SignupView,
    #[route("/dashboard")]
    DashboardView,
    #[route("/manage-expenses")]
    ExpensesView,
}

fn app() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

fn main() {
    launch(app);
}
