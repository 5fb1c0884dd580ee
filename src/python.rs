//! Python bindings for the credit methods
//!
//! Outcomes are returned as dicts with the same keys as their serialised Rust
//! form. Invalid inputs are raised as `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pythonize::pythonize;
use rscc_core::errors::RSCCError;
use rscc_core::parameters::{Gwp100Parameters, RfpParameters};
use rscc_core::types::{EmissionInput, FloatValue};
use rscc_core::Scenario;

fn to_py_err(e: RSCCError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Credits using a fixed GWP100 factor.
#[pyfunction]
#[pyo3(signature = (co2_avoided=10.0, ch4_avoided=1.0, gwp100=28.0))]
fn compute_gwp100(
    py: Python<'_>,
    co2_avoided: FloatValue,
    ch4_avoided: FloatValue,
    gwp100: FloatValue,
) -> PyResult<PyObject> {
    let outcome =
        rscc_core::compute_gwp100(co2_avoided, ch4_avoided, gwp100).map_err(to_py_err)?;
    Ok(pythonize(py, &outcome)?.into_py(py))
}

/// Credits using the Radiative Forcing Protocol.
#[pyfunction]
#[pyo3(signature = (co2_avoided=10.0, ch4_avoided=1.0, time_horizon=5.0, ch4_lifetime=12.0, re_ratio=173.0))]
fn compute_rfp(
    py: Python<'_>,
    co2_avoided: FloatValue,
    ch4_avoided: FloatValue,
    time_horizon: FloatValue,
    ch4_lifetime: FloatValue,
    re_ratio: FloatValue,
) -> PyResult<PyObject> {
    let outcome =
        rscc_core::compute_rfp(co2_avoided, ch4_avoided, time_horizon, ch4_lifetime, re_ratio)
            .map_err(to_py_err)?;
    Ok(pythonize(py, &outcome)?.into_py(py))
}

/// Evaluate both methods and the difference between them.
#[pyfunction]
#[pyo3(signature = (co2_avoided=10.0, ch4_avoided=1.0, gwp100=28.0, time_horizon=5.0, ch4_lifetime=12.0, re_ratio=173.0))]
fn compare(
    py: Python<'_>,
    co2_avoided: FloatValue,
    ch4_avoided: FloatValue,
    gwp100: FloatValue,
    time_horizon: FloatValue,
    ch4_lifetime: FloatValue,
    re_ratio: FloatValue,
) -> PyResult<PyObject> {
    let scenario = Scenario {
        emissions: EmissionInput {
            co2_avoided,
            ch4_avoided,
        },
        gwp100: Gwp100Parameters { gwp100 },
        rfp: RfpParameters {
            time_horizon,
            ch4_lifetime,
            re_ratio,
        },
    };
    let comparison = rscc_core::compare(&scenario).map_err(to_py_err)?;
    Ok(pythonize(py, &comparison)?.into_py(py))
}

#[pymodule]
#[pyo3(name = "_lib")]
fn rscc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(compute_gwp100, m)?)?;
    m.add_function(wrap_pyfunction!(compute_rfp, m)?)?;
    m.add_function(wrap_pyfunction!(compare, m)?)?;
    Ok(())
}
