// ============================================================================
// Numeric Module
// Decimal coordinates and error types for vector arithmetic
// ============================================================================
//
// This module provides:
// - Coordinate: the decimal scalar every vector component is stored as
// - IntoCoordinate: conversion from integers, floats, strings and decimals
// - VectorError: Error taxonomy for all vector operations
//
// Design principles:
// - No process-wide precision state (rust_decimal carries 28 digits)
// - All arithmetic returns Result (no panics)
// - Floats enter through their shortest round-trip text

mod coordinate;
mod errors;

pub(crate) use coordinate::{checked_dot, overflow};
pub use coordinate::{decimal_sqrt, round_to_scale, to_f64, Coordinate, IntoCoordinate};
pub use errors::{VectorError, VectorResult, EMPTY_COORDINATES_MSG, NOT_A_SEQUENCE_MSG};
