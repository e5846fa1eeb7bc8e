//! Python bindings, keeping the function names the time-series viewer calls

use crate::core::datetime::{
    compute_date_vectors, compute_temporal_baseline, date_index as index_dates,
    list_to_fractional_years, normalize_list_to_6digit, normalize_list_to_8digit,
    normalize_to_6digit, normalize_to_8digit, to_fractional_years,
};
use crate::io::DateListReader;
use crate::types::{DateError, DateResult};
use chrono::Datelike;
use pyo3::exceptions::{PyOSError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDate, PyList};
use std::collections::BTreeMap;

impl From<DateError> for PyErr {
    fn from(err: DateError) -> PyErr {
        match err {
            DateError::InvalidInputKind(_) => PyTypeError::new_err(err.to_string()),
            DateError::SourceUnavailable { .. } => PyOSError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// A date argument is either one string or a list of strings
enum DateArg {
    One(String),
    Many(Vec<String>),
}

fn date_arg(dates: &PyAny) -> DateResult<DateArg> {
    if let Ok(date) = dates.extract::<String>() {
        return Ok(DateArg::One(date));
    }
    let kind = || {
        DateError::InvalidInputKind(format!(
            "expected str or list of str, got {}",
            dates.get_type().name().unwrap_or("?")
        ))
    };
    let list = dates.downcast::<PyList>().map_err(|_| kind())?;
    list.extract::<Vec<String>>().map(DateArg::Many).map_err(|_| kind())
}

#[pyfunction]
fn yyyymmdd(py: Python<'_>, dates: &PyAny) -> PyResult<PyObject> {
    Ok(match date_arg(dates)? {
        DateArg::One(date) => normalize_to_8digit(&date).into_py(py),
        DateArg::Many(dates) => normalize_list_to_8digit(&dates).into_py(py),
    })
}

#[pyfunction]
fn yymmdd(py: Python<'_>, dates: &PyAny) -> PyResult<PyObject> {
    Ok(match date_arg(dates)? {
        DateArg::One(date) => normalize_to_6digit(&date).into_py(py),
        DateArg::Many(dates) => normalize_list_to_6digit(&dates).into_py(py),
    })
}

#[pyfunction]
fn yyyymmdd2years(py: Python<'_>, dates: &PyAny) -> PyResult<PyObject> {
    Ok(match date_arg(dates)? {
        DateArg::One(date) => to_fractional_years(&date)?.into_py(py),
        DateArg::Many(dates) => list_to_fractional_years(&dates)?.into_py(py),
    })
}

#[pyfunction]
fn read_date_list(path: &str) -> PyResult<Vec<String>> {
    Ok(DateListReader::read_date_list_file(path)?)
}

#[pyfunction]
fn date_list2tbase(dates: Vec<String>) -> PyResult<(Vec<i64>, BTreeMap<String, i64>)> {
    Ok(compute_temporal_baseline(&dates)?)
}

#[pyfunction]
fn date_list2vector(py: Python<'_>, dates: Vec<String>) -> PyResult<(Vec<PyObject>, Vec<f64>)> {
    let (calendar, vector) = compute_date_vectors(&dates)?;
    let calendar = calendar
        .iter()
        .map(|d| Ok(PyDate::new(py, d.year(), d.month() as u8, d.day() as u8)?.into_py(py)))
        .collect::<PyResult<Vec<_>>>()?;
    Ok((calendar, vector))
}

#[pyfunction]
fn date_index(dates: Vec<String>) -> BTreeMap<String, usize> {
    index_dates(&dates)
}

/// Python module definition
#[pymodule]
fn _core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(yyyymmdd, m)?)?;
    m.add_function(wrap_pyfunction!(yymmdd, m)?)?;
    m.add_function(wrap_pyfunction!(yyyymmdd2years, m)?)?;
    m.add_function(wrap_pyfunction!(read_date_list, m)?)?;
    m.add_function(wrap_pyfunction!(date_list2tbase, m)?)?;
    m.add_function(wrap_pyfunction!(date_list2vector, m)?)?;
    m.add_function(wrap_pyfunction!(date_index, m)?)?;
    Ok(())
}
