//! Orderable cell values.
//!
//! Column accessors turn a row into a [`SortValue`], which carries the total order the
//! comparator and the stable sort rely on. Missing values (absent optional fields, columns
//! without an accessor) are equal to each other and less than every defined value, so
//! they trail in descending order and lead in ascending order.

use std::{cmp::Ordering, fmt};

use chrono::{DateTime, Utc};

#[derive(Clone, Debug, Default)]
pub enum SortValue {
    #[default]
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(DateTime<Utc>),
}

impl SortValue {
    /// Rank used to order values of different kinds against each other.
    ///
    /// Integers and floats share a rank and compare numerically.
    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Bool(_) => 1,
            SortValue::Int(_) | SortValue::Float(_) => 2,
            SortValue::Text(_) => 3,
            SortValue::Date(_) => 4,
        }
    }

    pub(crate) fn is_truthy(&self) -> bool {
        match self {
            SortValue::Missing => false,
            SortValue::Bool(b) => *b,
            SortValue::Int(i) => *i != 0,
            SortValue::Float(f) => *f != 0.0 && !f.is_nan(),
            SortValue::Text(s) => !s.is_empty(),
            SortValue::Date(_) => true,
        }
    }
}

/// Orders floats numerically with NaN above every number and equal to itself.
///
/// `-0.0` and `0.0` compare equal, which keeps mixed int/float comparisons transitive.
fn cmp_float(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer against a float, without rounding the integer.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
    // 2^63, the first float above i64::MAX.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() || float >= LIMIT {
        return Ordering::Less;
    }
    if float < -LIMIT {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    int.cmp(&(whole as i64))
        .then_with(|| cmp_float(0.0, float - whole))
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
            (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
            (SortValue::Int(a), SortValue::Int(b)) => a.cmp(b),
            (SortValue::Float(a), SortValue::Float(b)) => cmp_float(*a, *b),
            (SortValue::Int(a), SortValue::Float(b)) => cmp_int_float(*a, *b),
            (SortValue::Float(a), SortValue::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

impl fmt::Display for SortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortValue::Missing => Ok(()),
            SortValue::Bool(b) => write!(f, "{}", b),
            SortValue::Int(i) => write!(f, "{}", i),
            SortValue::Float(x) => write!(f, "{}", x),
            SortValue::Text(s) => f.write_str(s),
            SortValue::Date(d) => write!(f, "{}", d.to_rfc3339()),
        }
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Bool(value)
    }
}

impl From<i32> for SortValue {
    fn from(value: i32) -> Self {
        SortValue::Int(value.into())
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Int(value)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        SortValue::Int(value.into())
    }
}

impl From<u64> for SortValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(SortValue::Int)
            .unwrap_or(SortValue::Float(value as f64))
    }
}

impl From<f32> for SortValue {
    fn from(value: f32) -> Self {
        SortValue::Float(value.into())
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Float(value)
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<&String> for SortValue {
    fn from(value: &String) -> Self {
        SortValue::Text(value.clone())
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(value: DateTime<Utc>) -> Self {
        SortValue::Date(value)
    }
}

impl<V: Into<SortValue>> From<Option<V>> for SortValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(SortValue::Missing)
    }
}
