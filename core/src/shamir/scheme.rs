use lagrange_math::prelude::*;
use rand::Rng;

use crate::interpolant::LagrangePolynomial;
use crate::shamir::error::{ShamirError, ShamirResult};
use crate::shamir::share::Share;

/// `threshold`-of-`participants` sharing over `GF(prime)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretSharing {
    threshold: usize,
    participants: usize,
    field: PrimeField,
}

impl SecretSharing {
    /// Validate the configuration.
    ///
    /// Requires `1 <= threshold <= participants < prime`, so that every
    /// participant id is a distinct non-zero field element.
    pub fn new(
        threshold: usize,
        participants: usize,
        prime: u64,
    ) -> ShamirResult<Self> {
        let field = PrimeField::new(prime)?;
        let fits_field = u64::try_from(participants)
            .map(|n| n < field.prime())
            .unwrap_or(false);
        if !(1..=participants).contains(&threshold) || !fits_field {
            return Err(ShamirError::InvalidThreshold(threshold, participants));
        }

        Ok(SecretSharing {
            threshold,
            participants,
            field,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn participants(&self) -> usize {
        self.participants
    }

    pub fn field(&self) -> PrimeField {
        self.field
    }

    /// Split `secret` using the thread-local RNG.
    pub fn split(&self, secret: u64) -> Vec<Share> {
        self.split_with(&mut rand::rng(), secret)
    }

    /// Split `secret` into one share per participant, ids `1..=participants`.
    pub fn split_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        secret: u64,
    ) -> Vec<Share> {
        let field = self.field;
        let coefficients: Vec<Residue> =
            std::iter::once(field.element_u64(secret))
                .chain((1..self.threshold).map(|_| field.random(rng)))
                .collect();

        let shares = (1..=self.participants as u64)
            .map(|participant_id| {
                let x = field.element_u64(participant_id);
                let value = coefficients
                    .iter()
                    .rev()
                    .fold(field.zero(), |acc, &c| field.add(field.mul(acc, x), c));
                Share {
                    participant_id,
                    value: value.value(),
                }
            })
            .collect();

        tracing::debug!(
            threshold = self.threshold,
            participants = self.participants,
            %field,
            "dealt secret shares"
        );
        shares
    }

    /// Recover the secret from the first `threshold` shares.
    #[tracing::instrument(level = "trace", skip_all, fields(provided = shares.len()))]
    pub fn reconstruct(&self, shares: &[Share]) -> ShamirResult<Residue> {
        if shares.len() < self.threshold {
            return Err(ShamirError::InsufficientShares(
                self.threshold,
                shares.len(),
            ));
        }

        let active_shares = &shares[..self.threshold];
        if let Some(share) = active_shares
            .iter()
            .find(|share| self.field.element_u64(share.participant_id) == 0)
        {
            return Err(ShamirError::InvalidParticipantId(share.participant_id));
        }

        let polynomial =
            LagrangePolynomial::from_points(self.field, active_shares)?;
        Ok(polynomial.constant_term()?)
    }
}
