use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// The fixed set of spending categories the form offers. The backend
/// stores these as display strings.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Category {
    Food,
    Travel,
    Entertainment,
    Education,
    #[serde(rename = "College Fees")]
    CollegeFees,
    Groceries,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Travel,
        Category::Entertainment,
        Category::Education,
        Category::CollegeFees,
        Category::Groceries,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Entertainment => "Entertainment",
            Category::Education => "Education",
            Category::CollegeFees => "College Fees",
            Category::Groceries => "Groceries",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct UserInfo {
    #[serde(default)]
    pub name: String,
}

/// Only `/login` returns this shape; `/register` answers with a
/// [`MessageResponse`].
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// One spending entry as the backend returns it. The list held client
/// side is a transient snapshot, re-fetched after every mutation.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ExpenseRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

impl ExpenseRecord {
    /// The record's date truncated to calendar-day precision. The
    /// backend may append a time component (`2024-03-05T10:00:00Z`).
    pub fn calendar_date(&self) -> &str {
        self.date.split('T').next().unwrap_or(self.date.as_str())
    }
}

/// Body shared by the create and update endpoints. No id; updates key
/// on the path parameter.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ExpensePayload {
    pub category: Category,
    pub amount: f64,
    pub date: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct ExpenseListResponse {
    #[serde(default)]
    pub data: Vec<ExpenseRecord>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct GraphPoint {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub expense: f64,
    #[serde(default)]
    pub color: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    #[serde(default)]
    pub all_time_spent_overall: f64,
    #[serde(default)]
    pub most_spent_category: Option<String>,
    #[serde(default)]
    pub least_spent_category: Option<String>,
    #[serde(default)]
    pub spent_on_entertainment: f64,
    #[serde(default)]
    pub current_month_expense: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct DashboardData {
    #[serde(default)]
    pub graph_data: Vec<GraphPoint>,
    #[serde(default)]
    pub others: DashboardSummary,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct DashboardResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<DashboardData>,
}

/// Case-insensitive substring match over the category column. A pure
/// projection of the fetched list; never persisted or sent upstream.
pub fn filter_by_category(records: &[ExpenseRecord], search: &str) -> Vec<ExpenseRecord> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|r| r.category.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Table column the expense list can be ordered by. Serial is the
/// fetched order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Serial,
    Category,
    Amount,
    Date,
}

/// Stable in-place sort of the visible rows. Like the filter this is a
/// pure projection; the backend never sees the ordering.
pub fn sort_by_column(records: &mut [ExpenseRecord], column: SortColumn, ascending: bool) {
    match column {
        SortColumn::Serial => {}
        SortColumn::Category => {
            records.sort_by(|a, b| a.category.to_lowercase().cmp(&b.category.to_lowercase()))
        }
        SortColumn::Amount => records.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
        SortColumn::Date => records.sort_by(|a, b| a.calendar_date().cmp(b.calendar_date())),
    }
    if !ascending {
        records.reverse();
    }
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// The slice of rows shown on a zero-based page. Out-of-range pages
/// yield an empty slice.
pub fn page_slice(records: &[ExpenseRecord], page: usize, per_page: usize) -> &[ExpenseRecord] {
    let start = page.saturating_mul(per_page).min(records.len());
    let end = start.saturating_add(per_page).min(records.len());
    &records[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: "0".to_string(),
            category: category.to_string(),
            amount: 1.0,
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn record_accepts_mongo_id_alias() {
        let raw = r#"{"_id":"abc123","category":"Food","amount":25.5,"date":"2024-03-05T10:00:00Z"}"#;
        let parsed: ExpenseRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.id, "abc123");
        assert_eq!(parsed.calendar_date(), "2024-03-05");

        let raw = r#"{"id":"xyz","category":"Travel","amount":3,"date":"2024-04-01"}"#;
        let parsed: ExpenseRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.id, "xyz");
        assert_eq!(parsed.calendar_date(), "2024-04-01");
    }

    #[test]
    fn category_wire_names() {
        assert_eq!(
            serde_json::to_string(&Category::CollegeFees).unwrap(),
            "\"College Fees\""
        );
        for category in Category::ALL {
            let round: Category =
                serde_json::from_str(&serde_json::to_string(&category).unwrap()).unwrap();
            assert_eq!(round, category);
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("Rent".parse::<Category>().is_err());
    }

    #[test]
    fn payload_serializes_display_category() {
        let payload = ExpensePayload {
            category: Category::CollegeFees,
            amount: 120.0,
            date: "2024-03-05".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["category"], "College Fees");
        assert_eq!(json["amount"], 120.0);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let records = vec![record("Food"), record("food2"), record("Travel")];
        let visible = filter_by_category(&records, "foo");
        let categories: Vec<_> = visible.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["Food", "food2"]);

        // empty search keeps everything
        assert_eq!(filter_by_category(&records, "").len(), 3);
        assert!(filter_by_category(&records, "rent").is_empty());
    }

    fn priced_record(id: &str, category: &str, amount: f64, date: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: id.to_string(),
            category: category.to_string(),
            amount,
            date: date.to_string(),
        }
    }

    #[test]
    fn sorting_orders_the_visible_rows() {
        let rows = vec![
            priced_record("a", "Travel", 30.0, "2024-02-01"),
            priced_record("b", "food", 10.0, "2024-03-01T08:00:00Z"),
            priced_record("c", "Food", 20.0, "2024-01-15"),
        ];

        let mut by_amount = rows.clone();
        sort_by_column(&mut by_amount, SortColumn::Amount, true);
        let ids: Vec<_> = by_amount.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        sort_by_column(&mut by_amount, SortColumn::Amount, false);
        let ids: Vec<_> = by_amount.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);

        // category ordering ignores case; the stable sort keeps the
        // fetched order for ties
        let mut by_category = rows.clone();
        sort_by_column(&mut by_category, SortColumn::Category, true);
        let ids: Vec<_> = by_category.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        // date ordering uses the calendar day, time suffix stripped
        let mut by_date = rows.clone();
        sort_by_column(&mut by_date, SortColumn::Date, true);
        let ids: Vec<_> = by_date.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);

        // serial descending is the fetched order reversed
        let mut by_serial = rows.clone();
        sort_by_column(&mut by_serial, SortColumn::Serial, false);
        let ids: Vec<_> = by_serial.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        let mut untouched = rows.clone();
        sort_by_column(&mut untouched, SortColumn::Serial, true);
        assert_eq!(untouched, rows);
    }

    #[test]
    fn pagination_slices_the_sorted_projection() {
        let rows: Vec<ExpenseRecord> = (0..25)
            .map(|i| priced_record(&i.to_string(), "Food", i as f64, "2024-01-01"))
            .collect();

        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(30, 10), 3);
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(25, 0), 0);

        assert_eq!(page_slice(&rows, 0, 10).len(), 10);
        assert_eq!(page_slice(&rows, 2, 10).len(), 5);
        assert_eq!(page_slice(&rows, 2, 10)[0].id, "20");
        assert!(page_slice(&rows, 3, 10).is_empty());
        assert!(page_slice(&[], 0, 10).is_empty());
    }

    #[test]
    fn dashboard_response_tolerates_partial_payload() {
        let parsed: DashboardResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(parsed.success);
        assert!(parsed.data.is_none());

        let parsed: DashboardResponse = serde_json::from_str(
            r##"{"success":true,"data":{"graph_data":[{"category":"Food","expense":10,"color":"#8884d8"}]}}"##,
        )
        .unwrap();
        let data = parsed.data.unwrap();
        assert_eq!(data.graph_data.len(), 1);
        assert_eq!(data.others, DashboardSummary::default());
        assert_eq!(data.others.most_spent_category, None);
    }

    #[test]
    fn login_request_wire_fields() {
        let json = serde_json::to_value(&LoginRequest {
            email: "a@b.co".to_string(),
            password: "secret".to_string(),
        })
        .unwrap();
        assert_eq!(json["email"], "a@b.co");
        assert_eq!(json["password"], "secret");

        let login: LoginResponse = serde_json::from_str(
            r#"{"token":"t0k3n","user":{"name":"Ana","email":"a@b.co"}}"#,
        )
        .unwrap();
        assert_eq!(login.token, "t0k3n");
        assert_eq!(login.user.name, "Ana");
    }
}
