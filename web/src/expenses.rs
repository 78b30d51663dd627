use dioxus::prelude::*;
use expense_api::prelude::*;
use expense_api::validate;

use crate::Route;
use crate::components::Header;
use crate::components::RequireSession;
use crate::components::confirm;
use crate::error::ErrorKind;
use crate::error::ErrorNotice;
use crate::error::UiError;
use crate::stores::session::SESSION_STORE;

/// One modal form shared between add and edit mode.
#[derive(Clone, Debug, PartialEq)]
enum ModalState {
    Closed,
    Add,
    Edit(String),
}

const ROWS_PER_PAGE: usize = 10;

#[component]
pub fn ExpensesView() -> Element {
    rsx! {
        Header {},
        RequireSession {
            ExpenseTable {}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ExpenseRowProps {
    index: usize,
    record: ExpenseRecord,
    on_edit: EventHandler<ExpenseRecord>,
    on_delete: EventHandler<String>,
}

#[component]
fn ExpenseRow(props: ExpenseRowProps) -> Element {
    let serial = props.index + 1;
    let date = props.record.calendar_date().to_string();
    let edit_record = props.record.clone();
    let delete_id = props.record.id.clone();

    rsx! {
        tr {
            td { style: "padding: 8px 12px; border: 1px solid #ddd;", "{serial}" }
            td { style: "padding: 8px 12px; border: 1px solid #ddd;", "{props.record.category}" }
            td { style: "padding: 8px 12px; border: 1px solid #ddd;", "{props.record.amount}" }
            td { style: "padding: 8px 12px; border: 1px solid #ddd;", "{date}" }
            td {
                style: "padding: 8px 12px; border: 1px solid #ddd;",
                button {
                    style: "padding: 6px 12px; background-color: #ffc107; color: #333; border: none; border-radius: 4px; font-size: 14px; cursor: pointer; margin-right: 8px;",
                    onclick: move |_| props.on_edit.call(edit_record.clone()),
                    "Edit"
                }
                button {
                    style: "padding: 6px 12px; background-color: #dc3545; color: white; border: none; border-radius: 4px; font-size: 14px; cursor: pointer;",
                    onclick: move |_| props.on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn ExpenseTable() -> Element {
    let mut expenses = use_signal(Vec::<ExpenseRecord>::new);
    let mut search = use_signal(String::new);
    let mut modal = use_signal(|| ModalState::Closed);
    let mut form_category = use_signal(String::new);
    let mut form_amount = use_signal(String::new);
    let mut form_date = use_signal(String::new);
    let mut category_error = use_signal(|| None::<String>);
    let mut amount_error = use_signal(|| None::<String>);
    let mut date_error = use_signal(|| None::<String>);
    let mut status = use_signal(|| None::<UiError>);
    let mut modal_status = use_signal(|| None::<UiError>);
    let mut data_version = use_signal(|| 0u32);
    let mut is_loading = use_signal(|| true);
    let mut sort_column = use_signal(|| SortColumn::Serial);
    let mut sort_ascending = use_signal(|| true);
    let mut page = use_signal(|| 0usize);

    // Re-fetch whenever the data version bumps (every successful
    // mutation). The filter below never reaches the backend.
    use_effect(move || {
        let _ = data_version();
        let token = SESSION_STORE.read().token();
        spawn(async move {
            let Some(token) = token else { return };
            is_loading.set(true);
            let api = ExpenseApi::default();
            match api.list_expenses(&token).await {
                Ok(list) => {
                    status.set(None);
                    expenses.set(list);
                }
                Err(e) => {
                    status.set(Some(UiError::from_request(e, "Failed to load expenses")));
                }
            }
            is_loading.set(false);
        });
    });

    let mut reset_form = move || {
        form_category.set(String::new());
        form_amount.set(String::new());
        form_date.set(String::new());
        category_error.set(None);
        amount_error.set(None);
        date_error.set(None);
        modal_status.set(None);
    };

    let open_add = move |_| {
        reset_form();
        modal.set(ModalState::Add);
    };

    let mut open_edit = move |record: ExpenseRecord| {
        form_category.set(record.category.clone());
        form_amount.set(record.amount.to_string());
        form_date.set(record.calendar_date().to_string());
        category_error.set(None);
        amount_error.set(None);
        date_error.set(None);
        modal_status.set(None);
        modal.set(ModalState::Edit(record.id));
    };

    let handle_submit = move |_| {
        let category_val = form_category.read().clone();
        let amount_val = form_amount.read().clone();
        let date_val = form_date.read().clone();

        let category_err = validate::category(&category_val);
        let amount_parsed = validate::amount(&amount_val);
        let date_err = validate::date(&date_val);
        category_error.set(category_err.clone());
        amount_error.set(amount_parsed.as_ref().err().cloned());
        date_error.set(date_err.clone());
        if category_err.is_some() || date_err.is_some() || amount_parsed.is_err() {
            modal_status.set(Some(UiError {
                kind: ErrorKind::Validation,
                message: "Please correct the highlighted fields".to_string(),
            }));
            return;
        }
        modal_status.set(None);
        let Ok(amount_num) = amount_parsed else { return };
        let Ok(category_parsed) = category_val.parse::<Category>() else {
            return;
        };

        let payload = ExpensePayload {
            category: category_parsed,
            amount: amount_num,
            date: date_val,
        };
        let mode = modal.read().clone();
        let token = SESSION_STORE.read().token();

        spawn(async move {
            let Some(token) = token else { return };
            let api = ExpenseApi::default();
            let result = match &mode {
                ModalState::Edit(id) => api.update_expense(&token, id, &payload).await,
                _ => api.add_expense(&token, &payload).await,
            };
            match result {
                // close the modal and re-fetch the whole list
                Ok(()) => {
                    modal.set(ModalState::Closed);
                    data_version.set(data_version() + 1);
                }
                // keep the modal open with the entered values intact
                Err(e) => {
                    modal_status.set(Some(UiError::from_request(e, "Failed to save expense")));
                }
            }
        });
    };

    let handle_delete = move |id: String| {
        if !confirm("You won't be able to revert this!") {
            return;
        }
        let token = SESSION_STORE.read().token();
        spawn(async move {
            let Some(token) = token else { return };
            let api = ExpenseApi::default();
            match api.delete_expense(&token, &id).await {
                Ok(()) => data_version.set(data_version() + 1),
                Err(e) => {
                    status.set(Some(UiError::from_request(e, "Failed to delete expense")));
                }
            }
        });
    };

    let mut toggle_sort = move |column: SortColumn| {
        if sort_column() == column {
            sort_ascending.set(!sort_ascending());
        } else {
            sort_column.set(column);
            sort_ascending.set(true);
        }
    };

    // filter, then sort, then page; all pure projections of the
    // fetched snapshot
    let mut rows = filter_by_category(&expenses.read(), &search.read());
    sort_by_column(&mut rows, sort_column(), sort_ascending());
    let pages = page_count(rows.len(), ROWS_PER_PAGE);
    let current_page = page().min(pages.saturating_sub(1));
    let first_row = current_page * ROWS_PER_PAGE;
    let page_label = current_page + 1;
    let visible = page_slice(&rows, current_page, ROWS_PER_PAGE).to_vec();

    let sort_marker = move |column: SortColumn| -> &'static str {
        if sort_column() != column {
            ""
        } else if sort_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    };
    let serial_marker = sort_marker(SortColumn::Serial);
    let category_marker = sort_marker(SortColumn::Category);
    let amount_marker = sort_marker(SortColumn::Amount);
    let date_marker = sort_marker(SortColumn::Date);

    let display_name = SESSION_STORE.read().display_name();
    let modal_state = modal.read().clone();
    let is_editing = matches!(modal_state, ModalState::Edit(_));

    rsx! {
        div {
            style: "padding: 20px 40px; font-family: Arial, sans-serif;",

            div {
                style: "display: flex; flex-direction: row; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                Link { to: Route::DashboardView,
                    button {
                        style: "padding: 8px 16px; background-color: #6c757d; color: white; border: none; border-radius: 4px; font-size: 14px; cursor: pointer;",
                        "← Back"
                    }
                }
                h5 {
                    style: "margin: 0; font-size: 1.2rem;",
                    "Welcome {display_name} 👋"
                }
            }

            div {
                style: "display: flex; flex-direction: row; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                input {
                    r#type: "text",
                    placeholder: "Search...",
                    value: "{search}",
                    oninput: move |e| {
                        search.set(e.value());
                        page.set(0);
                    },
                    style: "padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px; width: 240px;",
                }
                button {
                    onclick: open_add,
                    style: "padding: 12px; background-color: #007bff; color: white; border: none; border-radius: 4px; font-size: 16px; cursor: pointer; transition: background-color 0.2s;",
                    "Add Expense"
                }
            }

            if let Some(error) = status() {
                div {
                    style: "margin-bottom: 16px;",
                    ErrorNotice { error }
                }
            }

            table {
                style: "width: 100%; border-collapse: collapse; margin-top: 4px;",
                thead {
                    tr {
                        style: "background-color: #007bff; color: white; font-weight: bold; font-size: 16px;",
                        th {
                            style: "padding: 10px 12px; text-align: left; cursor: pointer;",
                            onclick: move |_| toggle_sort(SortColumn::Serial),
                            "S.No.{serial_marker}"
                        }
                        th {
                            style: "padding: 10px 12px; text-align: left; cursor: pointer;",
                            onclick: move |_| toggle_sort(SortColumn::Category),
                            "Category{category_marker}"
                        }
                        th {
                            style: "padding: 10px 12px; text-align: left; cursor: pointer;",
                            onclick: move |_| toggle_sort(SortColumn::Amount),
                            "Amount{amount_marker}"
                        }
                        th {
                            style: "padding: 10px 12px; text-align: left; cursor: pointer;",
                            onclick: move |_| toggle_sort(SortColumn::Date),
                            "Date{date_marker}"
                        }
                        th { style: "padding: 10px 12px; text-align: left;", "Actions" }
                    }
                }
                tbody {
                    if is_loading() {
                        tr {
                            td {
                                colspan: "5",
                                style: "padding: 16px; text-align: center; color: #555; border: 1px solid #ddd;",
                                "Loading..."
                            }
                        }
                    } else if visible.is_empty() {
                        tr {
                            td {
                                colspan: "5",
                                style: "padding: 16px; text-align: center; color: #555; border: 1px solid #ddd;",
                                "No expenses to show."
                            }
                        }
                    } else {
                        for (offset, record) in visible.into_iter().enumerate() {
                            ExpenseRow {
                                key: "{record.id}",
                                index: first_row + offset,
                                record,
                                on_edit: move |record: ExpenseRecord| open_edit(record),
                                on_delete: move |id: String| handle_delete(id),
                            }
                        }
                    }
                }
            }

            if pages > 1 {
                div {
                    style: "display: flex; flex-direction: row; justify-content: flex-end; align-items: center; gap: 12px; margin-top: 12px;",
                    button {
                        disabled: current_page == 0,
                        onclick: move |_| page.set(current_page.saturating_sub(1)),
                        style: "padding: 6px 12px; background-color: #6c757d; color: white; border: none; border-radius: 4px; font-size: 14px; cursor: pointer;",
                        "Prev"
                    }
                    span {
                        style: "font-size: 14px; color: #555;",
                        "Page {page_label} of {pages}"
                    }
                    button {
                        disabled: current_page + 1 >= pages,
                        onclick: move |_| page.set(current_page + 1),
                        style: "padding: 6px 12px; background-color: #6c757d; color: white; border: none; border-radius: 4px; font-size: 14px; cursor: pointer;",
                        "Next"
                    }
                }
            }

            if modal_state != ModalState::Closed {
                div {
                    style: "position: fixed; top: 0; right: 0; bottom: 0; width: 360px; background-color: white; border-left: 1px solid #ddd; box-shadow: -2px 0 8px rgba(0,0,0,0.2); padding: 20px; overflow-y: auto;",

                    div {
                        style: "display: flex; flex-direction: row; justify-content: space-between; align-items: center; margin-bottom: 20px;",
                        h5 {
                            style: "margin: 0; font-size: 1.2rem;",
                            { if is_editing { "Edit Expense" } else { "Add Expense" } }
                        }
                        button {
                            onclick: move |_| modal.set(ModalState::Closed),
                            style: "background: none; border: none; font-size: 20px; cursor: pointer;",
                            "✕"
                        }
                    }

                    div {
                        style: "margin-bottom: 20px;",
                        label {
                            style: "display: block; margin-bottom: 5px; font-weight: bold; color: #555;",
                            "Category"
                        }
                        select {
                            value: "{form_category}",
                            onchange: move |e| {
                                let value = e.value();
                                if validate::category(&value).is_none() {
                                    category_error.set(None);
                                }
                                form_category.set(value);
                            },
                            style: "width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px;",
                            option { value: "", selected: form_category().is_empty(), "Select Category" }
                            for category in Category::ALL {
                                option {
                                    value: "{category}",
                                    selected: form_category() == category.as_str(),
                                    "{category}"
                                }
                            }
                        }
                        if let Some(msg) = category_error() {
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
                            "Amount"
                        }
                        input {
                            r#type: "number",
                            value: "{form_amount}",
                            oninput: move |e| {
                                let value = e.value();
                                if validate::amount(&value).is_ok() {
                                    amount_error.set(None);
                                }
                                form_amount.set(value);
                            },
                            style: "width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px;",
                        }
                        if let Some(msg) = amount_error() {
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
                            "Date"
                        }
                        input {
                            r#type: "date",
                            value: "{form_date}",
                            oninput: move |e| {
                                let value = e.value();
                                if validate::date(&value).is_none() {
                                    date_error.set(None);
                                }
                                form_date.set(value);
                            },
                            style: "width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px;",
                        }
                        if let Some(msg) = date_error() {
                            p {
                                style: "color: #721c24; font-size: 14px; margin: 4px 0 0;",
                                "{msg}"
                            }
                        }
                    }

                    button {
                        onclick: handle_submit,
                        style: "width: 100%; padding: 12px; background-color: #007bff; color: white; border: none; border-radius: 4px; font-size: 16px; cursor: pointer; transition: background-color 0.2s;",
                        { if is_editing { "Save Changes" } else { "Add Expense" } }
                    }

                    if let Some(error) = modal_status() {
                        div {
                            style: "margin-top: 20px;",
                            ErrorNotice { error }
                        }
                    }
                }
            }
        }
    }
}
