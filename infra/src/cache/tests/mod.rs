//! Unit tests for cache module
