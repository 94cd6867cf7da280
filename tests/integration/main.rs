//! Integration tests for hookguard

mod dispatch_tests;
mod secret_tests;
