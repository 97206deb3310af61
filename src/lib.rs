//! Validation service for financial documents.
//!
//! This crate validates invoices, payslips, and expense reports submitted as
//! structured data, returning a pass/fail verdict plus a list of
//! human-readable error messages for each document.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
