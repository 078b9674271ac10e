//! Test modules for the ocean sensor client binary.
