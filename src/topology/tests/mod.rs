//! Unit tests for digital objects.

mod property_tests;
