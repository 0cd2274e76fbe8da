// File: crates/histogram-core/src/key.rs
// Summary: Bucket key values; numeric or calendar-day, with a total order.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// The kind of key a dimension extracts. Fixed per dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Num,
    Date,
}

/// A dimension key: a plain number or a calendar day.
///
/// Keys order totally (`f64::total_cmp` for numbers) so they can act as
/// bucket identities and half-open range bounds. A single dimension never
/// mixes kinds; the cross-kind ordering exists only to satisfy `Ord`.
#[derive(Clone, Copy, Debug)]
pub enum Key {
    Num(f64),
    Date(NaiveDate),
}

impl Key {
    pub fn kind(&self) -> KeyKind {
        match self {
            Key::Num(_) => KeyKind::Num,
            Key::Date(_) => KeyKind::Date,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match *self {
            Key::Num(v) => Some(v),
            Key::Date(_) => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match *self {
            Key::Num(_) => None,
            Key::Date(d) => Some(d),
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Num(a), Key::Num(b)) => a.total_cmp(b),
            (Key::Date(a), Key::Date(b)) => a.cmp(b),
            (Key::Num(_), Key::Date(_)) => Ordering::Less,
            (Key::Date(_), Key::Num(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Num(v) => write!(f, "{v}"),
            Key::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}
