//! Keywarden - age-based hygiene enforcement for AWS IAM access keys.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Full enforcement pass (scheduler entry point)
//! │   ├── check         # Report-only classification
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Environment-driven policy configuration
//!     ├── provider/     # Identity-provider capability
//!     │   ├── mod       # IdentityProvider trait + lazy user pagination
//!     │   └── aws       # AWS IAM implementation
//!     ├── inventory     # Per-user access key inventory with contacts
//!     ├── policy        # Age thresholds, classification, enforcement
//!     ├── mail/         # Mail capability
//!     │   ├── mod       # Mailer trait
//!     │   └── ses       # AWS SES implementation
//!     ├── notify        # Best-effort reminder dispatch
//!     └── validation    # Sender address validation
//! ```
//!
//! # Features
//!
//! - Two-threshold key age policy: remind the owner first, deactivate the
//!   key after a fixed seven-day grace window
//! - Contact resolution from IAM user tags
//! - Report-only mode for inspecting an account without side effects
//! - Narrow capability traits over the identity and mail providers

pub mod cli;
pub mod core;
pub mod error;
