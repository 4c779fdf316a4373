//! Python bindings for paley.
//!
//! This module exposes matrix construction and the number-theory predicates
//! to Python using PyO3. Enable the `python` feature to use this.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyList;

use crate::construct::jacobsthal as build_jacobsthal;
use crate::error::Error;
use crate::matrix::Matrix;
use crate::HadamardBuilder;

fn to_py_err(e: Error) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Python wrapper for Matrix
#[pyclass(name = "Matrix")]
pub struct PyMatrix {
    inner: Matrix,
}

#[pymethods]
impl PyMatrix {
    /// Get the order n of the n×n matrix.
    #[getter]
    fn order(&self) -> usize {
        self.inner.order()
    }

    /// Get the data as a list of lists.
    fn data(&self, py: Python<'_>) -> PyResult<PyObject> {
        let list = PyList::empty(py);
        for row in self.inner.rows() {
            let row_list = PyList::empty(py);
            for &value in row {
                row_list.append(value)?;
            }
            list.append(row_list)?;
        }
        Ok(list.into())
    }

    /// Check M·Mᵗ = n·I with ±1 entries.
    fn is_hadamard(&self) -> bool {
        self.inner.is_hadamard()
    }

    /// Check H + Hᵗ = 2I.
    fn is_skew_hadamard(&self) -> bool {
        self.inner.is_skew_hadamard()
    }

    fn __repr__(&self) -> String {
        format!("Matrix(order={})", self.inner.order())
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// Construct a Hadamard matrix of order n.
#[pyfunction]
#[pyo3(signature = (n, verbose=false))]
fn hadamard(n: usize, verbose: bool) -> PyResult<PyMatrix> {
    let matrix = HadamardBuilder::new()
        .verbose(verbose)
        .build(n)
        .map_err(to_py_err)?;

    Ok(PyMatrix { inner: matrix })
}

/// Describe how a Hadamard matrix of order n would be built.
#[pyfunction]
fn plan(n: usize) -> PyResult<String> {
    HadamardBuilder::new()
        .plan(n)
        .map(|p| p.to_string())
        .map_err(to_py_err)
}

/// Construct the Jacobsthal matrix of order q.
#[pyfunction]
fn jacobsthal(q: u32) -> PyResult<PyMatrix> {
    let matrix = build_jacobsthal(q).map_err(to_py_err)?;
    Ok(PyMatrix { inner: matrix })
}

/// Whether the Paley and Sylvester constructions reach order n.
#[pyfunction]
fn hadamard_exists(n: usize) -> bool {
    crate::hadamard_exists(n)
}

/// Whether n = p^k for a prime p and k ≥ 1.
#[pyfunction]
fn is_prime_power(n: u32) -> bool {
    crate::utils::is_prime_power(n)
}

/// The paley Python module.
#[pymodule]
fn paley(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyMatrix>()?;
    m.add_function(wrap_pyfunction!(hadamard, m)?)?;
    m.add_function(wrap_pyfunction!(plan, m)?)?;
    m.add_function(wrap_pyfunction!(jacobsthal, m)?)?;
    m.add_function(wrap_pyfunction!(hadamard_exists, m)?)?;
    m.add_function(wrap_pyfunction!(is_prime_power, m)?)?;
    Ok(())
}
