//! Thin PyO3 surface over the primary API, mirroring the shape of this
//! crate's native-Rust bindings surface: one function per entry point,
//! values converted to plain Python `dict`/`list`/scalar objects rather
//! than wrapping a Rust type.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::options::Options;
use crate::value::Value;

fn value_to_py(py: Python, value: &Value) -> PyResult<PyObject> {
    Ok(match value {
        Value::Null => py.None(),
        Value::Bool(b) => b.into_py(py),
        Value::Number(n) => n.into_py(py),
        Value::String(s) => s.clone().into_py(py),
        Value::Array(items) => {
            let list = PyList::empty(py);
            for item in items {
                list.append(value_to_py(py, item)?)?;
            }
            list.unbind().into()
        }
        Value::Object(obj) => {
            let dict = PyDict::new(py);
            for (k, v) in obj.iter() {
                dict.set_item(k, value_to_py(py, v)?)?;
            }
            dict.unbind().into()
        }
        Value::Absent => unreachable!("Absent never reaches a public result"),
    })
}

/// Parse `input` and return `(ok, results, error_count, errors)` as a
/// plain Python tuple, mirroring `parse_smart`'s `Outcome` fields
/// one-for-one (PyO3 has no zero-cost way to hand back a custom class
/// without registering one, and this binding is intentionally thin).
#[pyfunction]
#[pyo3(signature = (input, strict=false, max_depth=100, allow_comments=true, allow_trailing_comma=true, convert_python_tokens=true, convert_undefined=true))]
#[allow(clippy::too_many_arguments)]
fn parse_smart(
    py: Python,
    input: &str,
    strict: bool,
    max_depth: usize,
    allow_comments: bool,
    allow_trailing_comma: bool,
    convert_python_tokens: bool,
    convert_undefined: bool,
) -> PyResult<(bool, Vec<PyObject>, usize, Vec<String>)> {
    let options = Options {
        strict,
        max_depth,
        allow_comments,
        allow_trailing_comma,
        convert_python_tokens,
        convert_undefined,
    };
    let outcome = crate::parse_smart(input, Some(options));
    let results = outcome
        .results
        .iter()
        .map(|v| value_to_py(py, v))
        .collect::<PyResult<Vec<_>>>()?;
    Ok((outcome.ok, results, outcome.error_count, outcome.errors))
}

#[pymodule]
fn jsonfix(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_smart, m)?)?;
    Ok(())
}
