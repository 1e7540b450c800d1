//! Create → verify → repair reconciliation for the pull-request body.
//!
//! `gh pr create` is known to be lossy for certain byte sequences under
//! shell/argument-passing semantics, and reading the stored value back and
//! diffing is the only reliable detector. Comparison happens on canonical
//! forms so CRLF endings or trailing-newline drift introduced by the
//! transport never count as divergence.
//!
//! Repair is attempted exactly once. A transport that corrupts every payload
//! identically would never converge, so a second mismatch must fail loudly
//! rather than spin.

use tracing::{debug, info, instrument, warn};

use crate::core::canonical::canonicalize;
use crate::error::Error;
use crate::io::body::BodySource;
use crate::io::gh::{PrGateway, PrParams};

/// Successful reconciliation: the stored body canonically matches the source
/// at the moment of this run's last read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub url: String,
    /// True when the body only matched after the repair edit.
    pub repaired: bool,
}

/// Create the pull request and drive its stored body to match `body`.
///
/// Creation failure is terminal with no compensating action: the remote call
/// is assumed non-partial, so either the pull request exists or it does not.
#[instrument(skip_all, fields(title = %params.title))]
pub fn reconcile<G: PrGateway>(
    gateway: &mut G,
    params: &PrParams,
    body: &BodySource,
) -> Result<Reconciled, Error> {
    gateway.create(params, body.path())?;
    info!("pull request created, verifying stored body");

    let expected = canonicalize(&body.read()?);
    let stored = canonicalize(&gateway.current_body()?);
    if stored == expected {
        debug!("stored body matches source");
        let url = gateway.current_url()?;
        return Ok(Reconciled {
            url,
            repaired: false,
        });
    }

    let number = gateway.current_number()?;
    warn!(number = %number, "stored body diverged from source, repairing");
    gateway.edit_body(&number, body.path())?;

    let repaired = canonicalize(&gateway.current_body()?);
    if repaired != expected {
        return Err(Error::Reconciliation { number });
    }

    info!(number = %number, "body repaired and verified");
    let url = gateway.current_url()?;
    Ok(Reconciled {
        url,
        repaired: true,
    })
}
