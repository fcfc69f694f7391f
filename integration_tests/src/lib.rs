//! End-to-end workflow tests for the savings fund contract live in `tests/`.
