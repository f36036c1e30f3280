//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer owns input validation and result reporting for the public
//! API: fail-fast parameter/data checks and the diagnostic sort report.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Analysis / Text
//!   ↓
//! Layer 2: Sorting
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast validation of parameters and input data.
pub mod validator;

/// Sort result reporting.
pub mod output;
