//! Shared test utilities for pulse-store unit tests.
