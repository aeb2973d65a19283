//! Token collector.
//!
//! Drives a scanner to exhaustion and moves every token's text into a
//! [`TokenSeq`]. The collector owns the source for the whole run and drops
//! it exactly once before returning, whatever the outcome. On failure
//! nothing survives: collected payloads, the payload being stored, the
//! sequence, and the source are all released, and the caller gets a
//! [`CollectError`] instead of a partial result.

use tracing::debug;

use crate::seq::{GrowError, GrowthPolicy, TokenSeq};
use crate::source::{ScanSource, TokenScanner};
use crate::token::Token;

/// Why a collection run produced no sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollectError {
    /// No source buffer was supplied.
    #[error("no source buffer to scan")]
    MissingSource,
    /// The empty sequence could not be reserved.
    #[error("could not reserve the token sequence: {0}")]
    Alloc(#[source] GrowError),
    /// The sequence could not grow to hold the next token.
    #[error("could not grow the token sequence after {collected} tokens: {source}")]
    Grow {
        /// Tokens stored (and then released) before the failure.
        collected: usize,
        source: GrowError,
    },
}

/// Collects scanner output under a [`GrowthPolicy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Collector {
    policy: GrowthPolicy,
}

impl Collector {
    pub fn new(policy: GrowthPolicy) -> Self {
        Self { policy }
    }

    /// Scan `source` to the end and return every token's text in order.
    ///
    /// `None` entries are unrecognised lexemes, stored as the scanner
    /// produced them. `source` is dropped before this returns.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(initial = self.policy.initial_capacity().get())
    )]
    pub fn collect<S: ScanSource>(&self, source: S) -> Result<TokenSeq<S::Text>, CollectError> {
        let mut seq = match TokenSeq::with_policy(self.policy) {
            Ok(seq) => seq,
            Err(e) => {
                debug!(error = %e, "initial reservation failed");
                drop(source);
                return Err(CollectError::Alloc(e));
            }
        };

        let result = drain(&mut source.scanner(), &mut seq);
        drop(source);

        match result {
            Ok(()) => {
                debug!(tokens = seq.len(), capacity = seq.capacity(), "collected");
                Ok(seq)
            }
            Err(e) => {
                let collected = seq.rollback();
                debug!(collected, error = %e, "growth failed, rolled back");
                Err(CollectError::Grow {
                    collected,
                    source: e,
                })
            }
        }
    }

    /// [`collect`](Self::collect) for callers whose source may be absent.
    ///
    /// `None` fails with [`CollectError::MissingSource`] without reserving
    /// anything.
    pub fn collect_optional<S: ScanSource>(
        &self,
        source: Option<S>,
    ) -> Result<TokenSeq<S::Text>, CollectError> {
        match source {
            Some(source) => self.collect(source),
            None => Err(CollectError::MissingSource),
        }
    }
}

/// Move scanner output into `seq` until EOF.
fn drain<S: TokenScanner>(scanner: &mut S, seq: &mut TokenSeq<S::Text>) -> Result<(), GrowError> {
    loop {
        match scanner.next_token() {
            Token::Eof(trailing) => {
                if trailing.is_some() {
                    tracing::trace!("released text attached to EOF");
                }
                return Ok(());
            }
            Token::Lexeme { text, .. } => seq.push(text)?,
        }
    }
}
