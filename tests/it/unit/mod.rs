//! Unit tests for lanedraw.
