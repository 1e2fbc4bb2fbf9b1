//! Step selector: which fields, labels and color encoding each narrative
//! step shows.
//!
//! This is the single source of truth for the step table. Both the
//! scroll-driven update and the resize re-render go through
//! [`select_step`].

use crate::data::dataset::Field;

/// Encoding of one narrative step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSpec {
    pub x_field: Field,
    pub y_field: Field,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub use_color: bool,
}

const FOO_VS_BAR: StepSpec = StepSpec {
    x_field: Field::Foo,
    y_field: Field::Bar,
    x_label: "Foo Values",
    y_label: "Bar Values",
    use_color: false,
};

const BAR_VS_BAZ: StepSpec = StepSpec {
    x_field: Field::Bar,
    y_field: Field::Baz,
    x_label: "Bar Values",
    y_label: "Baz Values",
    use_color: false,
};

const BAZ_VS_FOO: StepSpec = StepSpec {
    x_field: Field::Baz,
    y_field: Field::Foo,
    x_label: "Baz Values",
    y_label: "Foo Values",
    use_color: false,
};

const BAZ_VS_FOO_COLORED: StepSpec = StepSpec {
    x_field: Field::Baz,
    y_field: Field::Foo,
    x_label: "Baz Values (Color Encoded)",
    y_label: "Foo Values",
    use_color: true,
};

/// Resolve the encoding for `index`.
///
/// Total over all integers: indices outside `0..=3` (scroll overshoot in
/// either direction) get step 0's encoding.
pub fn select_step(index: i64) -> StepSpec {
    match index {
        1 => BAR_VS_BAZ,
        2 => BAZ_VS_FOO,
        3 => BAZ_VS_FOO_COLORED,
        _ => FOO_VS_BAR,
    }
}

/// Sentence announced to assistive technology after each update.
pub fn status_message(index: i64, encoding: &StepSpec) -> String {
    format!(
        "Step {}: Now showing {} versus {}",
        index.saturating_add(1),
        encoding.x_label,
        encoding.y_label
    )
}
