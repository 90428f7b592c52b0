//! Japanese pipeline: morphological-token segmentation, detection, conversion
//!
//! Tokenization itself is an external collaborator supplied through the
//! [`TokenProvider`](token::TokenProvider) capability. Every stage treats a
//! missing provider as a valid state and fails closed to single-clause /
//! Simple behavior instead of erroring.

pub mod converter;
pub mod detector;
pub mod segmenter;
pub mod token;
