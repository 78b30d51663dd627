use dioxus::prelude::*;
use expense_api::prelude::*;

use crate::Route;
use crate::components::Header;
use crate::components::RequireSession;
use crate::components::confirm;
use crate::error::ErrorNotice;
use crate::error::UiError;
use crate::stores::session::SESSION_STORE;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn current_month_label() -> String {
    let now = js_sys::Date::new_0();
    let month = MONTHS.get(now.get_month() as usize).unwrap_or(&"");
    format!("{} {}", month, now.get_full_year())
}

#[component]
pub fn DashboardView() -> Element {
    rsx! {
        Header {},
        RequireSession {
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let navigator = use_navigator();
    let mut graph_data = use_signal(Vec::<GraphPoint>::new);
    let mut summary = use_signal(DashboardSummary::default);
    let mut status = use_signal(|| None::<UiError>);

    // One fetch on mount. On failure the view keeps its defaults and
    // surfaces the error instead of blocking.
    use_effect(move || {
        let token = SESSION_STORE.read().token();
        spawn(async move {
            let Some(token) = token else { return };
            let api = ExpenseApi::default();
            match api.dashboard_overview(&token).await {
                Ok(data) => {
                    graph_data.set(data.graph_data);
                    summary.set(data.others);
                }
                Err(e) => {
                    status.set(Some(UiError::from_request(e, "Failed to load dashboard")));
                }
            }
        });
    });

    let handle_logout = move |_| {
        if confirm("You will be logged out!") {
            SESSION_STORE.write().clear_session();
            navigator.push(Route::WelcomeView);
        }
    };

    let graph = graph_data.read();
    let max_expense = graph.iter().map(|p| p.expense).fold(0.0_f64, f64::max);
    let bars: Vec<(String, u32, String, f64)> = graph
        .iter()
        .map(|p| {
            let height = if max_expense > 0.0 {
                (p.expense / max_expense * 220.0).round() as u32
            } else {
                0
            };
            (p.category.clone(), height, p.color.clone(), p.expense)
        })
        .collect();
    let summary = summary.read().clone();
    let display_name = SESSION_STORE.read().display_name();
    let month_label = current_month_label();

    rsx! {
        div {
            style: "padding: 20px 40px; font-family: Arial, sans-serif;",

            h5 {
                style: "font-size: 1.2rem; margin: 0 0 10px;",
                "Welcome, {display_name} 👋"
            }
            hr {}

            if let Some(error) = status() {
                div {
                    style: "margin: 10px 0;",
                    ErrorNotice { error }
                }
            }

            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 20px; margin-top: 10px;",

                div {
                    style: "flex: 1; min-width: 320px; border: 1px solid #ddd; border-radius: 6px; box-shadow: 0 1px 4px rgba(0,0,0,0.1);",
                    div {
                        style: "padding: 12px; border-bottom: 1px solid #ddd;",
                        h5 {
                            style: "margin: 0; border-left: 3px solid #787272; padding-left: 10px;",
                            "Overall Expenses"
                        }
                    }
                    div {
                        style: "padding: 20px;",
                        if bars.is_empty() {
                            p {
                                style: "text-align: center; color: #555;",
                                "No expense data yet."
                            }
                        } else {
                            div {
                                style: "display: flex; flex-direction: row; align-items: flex-end; gap: 12px; height: 260px;",
                                for (category, height, color, expense) in bars {
                                    div {
                                        key: "{category}",
                                        style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: flex-end; height: 100%;",
                                        span {
                                            style: "font-size: 12px; color: #555;",
                                            "{expense}"
                                        }
                                        div {
                                            style: "width: 100%; height: {height}px; background-color: {color}; border-radius: 4px 4px 0 0;",
                                        }
                                        span {
                                            style: "font-size: 12px; color: #333; margin-top: 4px;",
                                            "{category}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    style: "flex: 1; min-width: 320px; display: flex; flex-direction: column; gap: 10px;",
                    div {
                        style: "border: 1px solid #ddd; border-radius: 6px; box-shadow: 0 1px 4px rgba(0,0,0,0.1);",
                        div {
                            style: "padding: 12px; border-bottom: 1px solid #ddd;",
                            h5 {
                                style: "margin: 0; border-left: 3px solid #787272; padding-left: 10px;",
                                "Overall Summary"
                            }
                        }
                        table {
                            style: "width: 100%; border-collapse: collapse;",
                            tbody {
                                tr {
                                    td { style: "padding: 8px 12px; border: 1px solid #ddd;", "Total Spent" }
                                    td { style: "padding: 8px 12px; border: 1px solid #ddd;", "{summary.all_time_spent_overall} Rs." }
                                }
                                tr {
                                    td { style: "padding: 8px 12px; border: 1px solid #ddd;", "Most Spent on" }
                                    td {
                                        style: "padding: 8px 12px; border: 1px solid #ddd;",
                                        { summary.most_spent_category.clone().unwrap_or_else(|| "N/A".to_string()) }
                                    }
                                }
                                tr {
                                    td { style: "padding: 8px 12px; border: 1px solid #ddd;", "Least Spent on" }
                                    td {
                                        style: "padding: 8px 12px; border: 1px solid #ddd;",
                                        { summary.least_spent_category.clone().unwrap_or_else(|| "N/A".to_string()) }
                                    }
                                }
                                tr {
                                    td { style: "padding: 8px 12px; border: 1px solid #ddd;", "Spent on Entertainment" }
                                    td { style: "padding: 8px 12px; border: 1px solid #ddd;", "{summary.spent_on_entertainment} Rs." }
                                }
                                tr {
                                    td { style: "padding: 8px 12px; border: 1px solid #ddd;", "Total Spent ({month_label})" }
                                    td { style: "padding: 8px 12px; border: 1px solid #ddd;", "{summary.current_month_expense} Rs." }
                                }
                            }
                        }
                    }
                    div {
                        style: "border: 1px solid #ddd; border-radius: 6px; box-shadow: 0 1px 4px rgba(0,0,0,0.1); padding: 16px; text-align: center;",
                        Link { to: Route::ExpensesView,
                            button {
                                style: "padding: 12px; background-color: #007bff; color: white; border: none; border-radius: 4px; font-size: 16px; cursor: pointer; transition: background-color 0.2s;",
                                "View Details / Add Expense"
                            }
                        }
                        span { style: "color: #cdb6b6; margin: 0 8px;", "|" }
                        button {
                            onclick: handle_logout,
                            style: "padding: 12px; background-color: #dc3545; color: white; border: none; border-radius: 4px; font-size: 16px; cursor: pointer; transition: background-color 0.2s;",
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}
