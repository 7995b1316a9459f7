//! # Core Application Logic
//!
//! Everything in this module is pure state and transition rules — it knows
//! nothing about terminals or rendering (settings persistence is the one
//! file-touching boundary, and even it never sees the TUI).
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!                 │            CORE              │
//!                 │  (this module)               │
//!                 │                              │
//!                 │  catalog     (structure)     │
//!                 │  navigation  (2D cursor)     │
//!                 │  gesture     (drag → intent) │
//!                 │  deeplink    (fragment codec)│
//!                 │  settings    (persisted duo) │
//!                 │                              │
//!                 │  No rendering. No events.    │
//!                 └──────────────┬───────────────┘
//!                                │
//!                                ▼
//!                        ┌──────────────┐
//!                        │     TUI      │
//!                        │   adapter    │
//!                        │  (ratatui)   │
//!                        └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: the fixed category/item structure and opaque payloads
//! - [`navigation`]: the `Navigator` — cursor, modal flag, signals
//! - [`gesture`]: press/drag/release → tap or counted swipe
//! - [`deeplink`]: `#/<category>[/<item>]` fragment codec
//! - [`settings`]: theme + sound flag, load/save boundary

pub mod catalog;
pub mod deeplink;
pub mod gesture;
pub mod navigation;
pub mod settings;
