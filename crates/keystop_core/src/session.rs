//! Editing session
//!
//! Holds the current gradient together with its latest samples. Every
//! accepted edit bumps the revision and resamples in full.

use tracing::{debug, warn};

use crate::color::Rgba;
use crate::edit::Edit;
use crate::encode::{encode, Format};
use crate::error::Result;
use crate::gradient::Gradient;
use crate::sample::sample;
use crate::snapshot::GradientSnapshot;

/// A gradient being edited, with the samples for its current revision
#[derive(Clone, Debug)]
pub struct Session {
    gradient: Gradient,
    revision: u64,
    samples: Vec<Rgba>,
}

impl Session {
    /// Start a session at revision 0. Fails if either stop list is empty.
    pub fn new(gradient: Gradient) -> Result<Self> {
        let samples = sample(&gradient)?;
        Ok(Self {
            gradient,
            revision: 0,
            samples,
        })
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn samples(&self) -> &[Rgba] {
        &self.samples
    }

    /// Apply an edit and resample. On error nothing changes.
    pub fn apply(&mut self, edit: Edit) -> Result<&[Rgba]> {
        let next = match self.gradient.clone().apply(edit).and_then(|g| {
            let samples = sample(&g)?;
            Ok((g, samples))
        }) {
            Ok(next) => next,
            Err(err) => {
                warn!(?edit, %err, "edit rejected");
                return Err(err);
            }
        };

        (self.gradient, self.samples) = next;
        self.revision += 1;
        debug!(revision = self.revision, "gradient updated");
        Ok(&self.samples)
    }

    /// Encode the current samples
    pub fn encode(&self, format: Format) -> String {
        encode(&self.samples, format)
    }

    pub fn snapshot(&self) -> GradientSnapshot {
        GradientSnapshot::from(&self.gradient)
    }
}
