use serde::{Deserialize, Serialize};

/// Direction of the active sort column.
///
/// Serialized as `"asc"` / `"desc"` so it can live in a query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl Order {
    pub fn toggled(self) -> Self {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }

    pub fn is_desc(self) -> bool {
        self == Order::Descending
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}
