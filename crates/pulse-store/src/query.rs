//! Row filters shared by both backends.
//!
//! The REST backend renders a [`Query`] as PostgREST query parameters; the
//! memory backend evaluates it directly against JSON rows.

use std::cmp::Ordering;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `column = value`
    Eq { column: String, value: String },
    /// `column IN (values)`
    In { column: String, values: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// Filters, ordering, and limit for a select or delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn eq(mut self, column: &str, value: impl Into<String>) -> Self {
        self.filters.push(Filter::Eq {
            column: column.to_string(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn is_in<I, S>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.push(Filter::In {
            column: column.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[must_use]
    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            ascending,
        });
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// PostgREST filter parameters (no `select`, no ordering).
    #[must_use]
    pub fn filter_params(&self) -> Vec<String> {
        self.filters
            .iter()
            .map(|filter| match filter {
                Filter::Eq { column, value } => {
                    format!("{column}=eq.{}", urlencoding::encode(value))
                }
                Filter::In { column, values } => {
                    let quoted = values
                        .iter()
                        .map(|v| format!("\"{}\"", v.replace('"', "\\\"")))
                        .collect::<Vec<_>>()
                        .join(",");
                    format!("{column}=in.({})", urlencoding::encode(&quoted))
                }
            })
            .collect()
    }

    /// Full PostgREST query string for a select.
    #[must_use]
    pub fn to_select_params(&self) -> String {
        let mut params = vec!["select=*".to_string()];
        params.extend(self.filter_params());
        if let Some(order) = &self.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            params.push(format!("order={}.{direction}", order.column));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        params.join("&")
    }

    /// Whether `row` passes every filter.
    #[must_use]
    pub fn matches(&self, row: &Value) -> bool {
        self.filters.iter().all(|filter| match filter {
            Filter::Eq { column, value } => {
                column_text(row, column).is_some_and(|text| &text == value)
            }
            Filter::In { column, values } => {
                column_text(row, column).is_some_and(|text| values.contains(&text))
            }
        })
    }

    /// Sort rows in place per the query's order. Nulls sort last.
    pub fn sort(&self, rows: &mut [Value]) {
        if let Some(order) = &self.order {
            rows.sort_by(|a, b| {
                let ord = compare_values(a.get(&order.column), b.get(&order.column));
                if order.ascending { ord } else { ord.reverse() }
            });
        }
    }
}

/// Text form of a scalar column, as a PostgREST `eq` filter would compare it.
fn column_text(row: &Value, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}
