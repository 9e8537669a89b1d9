//! PyO3 bindings for the `rectkit` geometry toolkit.
//!
//! Notes
//! - Keep bindings thin and predictable; conversions use simple tuples/lists,
//!   the conversion helpers live in `common.rs`.
//! - One module per concern, each exposing its own `register()`, so
//!   `lib.rs` stays a wiring list.

mod clip;
mod common;
mod contour;
mod decompose;
mod matching;

use pyo3::prelude::*;

#[pymodule]
fn rectkit_native(_py: Python, m: &PyModule) -> PyResult<()> {
    clip::register(m)?;
    contour::register(m)?;
    decompose::register(m)?;
    matching::register(m)?;
    Ok(())
}
