//! dotviz Core Types and Definitions
//!
//! This crate provides the foundational types shared by the dotviz parser
//! and renderer. It includes:
//!
//! - **Attributes**: Order-preserving `key=value` maps ([`attributes::Attributes`])
//! - **Graph**: The parsed graph model ([`graph::Graph`])
//! - **Colors**: CSS color validation ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Shapes**: Node shape selection and SVG drawing ([`shape`] module)

pub mod attributes;
pub mod color;
pub mod geometry;
pub mod graph;
pub mod shape;
