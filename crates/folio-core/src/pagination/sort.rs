//! Sort specification: an ordered list of `(field, direction)` pairs.

use crate::{FolioError, FolioResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl Direction {
    /// Returns true for ascending order.
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }
}

impl FromStr for Direction {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(FolioError::invalid_argument(format!(
                "Invalid sort direction '{other}' (expected asc or desc)"
            ))),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "ASC"),
            Self::Desc => write!(f, "DESC"),
        }
    }
}

/// A single sort criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// Property the result is ordered by.
    pub field: String,
    /// Direction of the ordering.
    pub direction: Direction,
}

impl Order {
    /// Creates an ascending order on `field`.
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending order on `field`.
    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

/// Ordered sequence of sort criteria. Earlier orders take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sort(Vec<Order>);

impl Sort {
    /// The empty sort (source order).
    #[must_use]
    pub const fn unsorted() -> Self {
        Self(Vec::new())
    }

    /// Sorts by the given fields, all in `direction`.
    #[must_use]
    pub fn by<I, S>(direction: Direction, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            fields
                .into_iter()
                .map(|field| Order {
                    field: field.into(),
                    direction,
                })
                .collect(),
        )
    }

    /// Builds a sort from explicit orders.
    #[must_use]
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self(orders)
    }

    /// Appends the orders of `other` after this one's.
    #[must_use]
    pub fn and(mut self, other: Sort) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Parses one `sort` request parameter.
    ///
    /// Format is `field[,field...][,asc|desc]`. A trailing token that parses as a
    /// direction applies to every field in the parameter; otherwise all fields
    /// sort ascending.
    pub fn parse_param(param: &str) -> FolioResult<Self> {
        let mut tokens: Vec<&str> = param.split(',').map(str::trim).collect();

        let direction = match tokens.last().map(|t| t.parse::<Direction>()) {
            Some(Ok(direction)) if tokens.len() > 1 => {
                tokens.pop();
                direction
            }
            _ => Direction::Asc,
        };

        if tokens.iter().any(|t| t.is_empty()) {
            return Err(FolioError::invalid_argument(format!(
                "Invalid sort parameter '{param}': empty property name"
            )));
        }

        Ok(Self::by(direction, tokens))
    }

    /// Parses a sequence of repeated `sort` parameters, in request order.
    pub fn parse_params<I, S>(params: I) -> FolioResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        params
            .into_iter()
            .try_fold(Self::unsorted(), |acc, p| Ok(acc.and(Self::parse_param(p.as_ref())?)))
    }

    /// Returns true when no ordering is requested.
    #[must_use]
    pub fn is_unsorted(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the orders in precedence order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.0
    }

    /// Looks up the order for a field, if present.
    #[must_use]
    pub fn order_for(&self, field: &str) -> Option<&Order> {
        self.0.iter().find(|o| o.field == field)
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "UNSORTED");
        }
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|o| format!("{}: {}", o.field, o.direction))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
