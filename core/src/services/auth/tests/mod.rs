//! Tests for the identity verification engine

mod mocks;
