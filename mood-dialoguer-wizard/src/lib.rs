//! # mood-dialoguer-wizard
//!
//! Dialoguer wizard host for mood-survey.
//!
//! This crate renders the PANAS mood survey and the story preferences form as
//! a command-line wizard using the `dialoguer` library. Each step shows its
//! items as five-option choices, followed by a Next/Back menu.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mood_survey::{DelaySubmitter, Session};
//! use mood_dialoguer_wizard::DialoguerHost;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let host = DialoguerHost::new();
//!     let mut session = Session::panas();
//!     let completion = host.run_mood(&mut session, &DelaySubmitter::default()).await?;
//!     println!("{}", completion.scores.summary());
//!     println!("-> {}", completion.navigation);
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerError, DialoguerHost, progress_bar, rating_choices};
