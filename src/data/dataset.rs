//! The compiled-in records plotted by the story.

use serde::{Deserialize, Serialize};

/// Numeric field of a [`Record`] that a step can place on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Foo,
    Bar,
    Baz,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Foo => "foo",
            Field::Bar => "bar",
            Field::Baz => "baz",
        }
    }
}

/// One row of the dataset. Never mutated after startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub id: u32,
    pub foo: f64,
    pub bar: f64,
    pub baz: f64,
}

impl Record {
    pub const fn new(id: u32, foo: f64, bar: f64, baz: f64) -> Self {
        Self { id, foo, bar, baz }
    }

    /// Read a field by selector.
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Foo => self.foo,
            Field::Bar => self.bar,
            Field::Baz => self.baz,
        }
    }
}

static RECORDS: [Record; 9] = [
    Record::new(0, 4.0, 1.0, 7.0),
    Record::new(1, 6.0, 7.0, 2.0),
    Record::new(2, 9.0, 5.0, 9.0),
    Record::new(3, 2.0, 4.0, 3.0),
    Record::new(4, 8.0, 2.0, 8.0),
    Record::new(5, 9.0, 9.0, 1.0),
    Record::new(6, 5.0, 3.0, 5.0),
    Record::new(7, 3.0, 8.0, 6.0),
    Record::new(8, 1.0, 6.0, 4.0),
];

/// The ordered, immutable record set.
pub fn dataset() -> &'static [Record] {
    &RECORDS
}
