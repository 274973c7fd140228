//! Serialization round trips for `numarray`; see `tests/`.
