//! Integration tests for loading complete site configurations

mod load_tests;
