//! Strongly-typed ID wrappers for persisted entities
//!
//! IDs are sequential integers handed out by the store on insert. The
//! newtypes keep expense and budget IDs from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// The ID the store hands out after this one
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(BudgetId, "bud-");
