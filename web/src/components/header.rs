use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Header() -> Element {
    rsx! {
        div {
            style: "margin: 0; padding: 12px; display: flex; flex-direction: row; justify-content: center; background-color: #0b3d4e;",
            Link {
                style: "text-decoration: none; color: white;",
                to: Route::WelcomeView,
                h3 {
                    style: "margin: 0; font-size: 1.5rem;",
                    "Expense Manager"
                }
            }
        }
    }
}
