use lagrange_math::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shamir::error::{ShamirError, ShamirResult};
use crate::traits::PointSource;

/// One participant's share: the dealing polynomial evaluated at its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    pub participant_id: u64,
    pub value: u64,
}

impl Share {
    pub fn new(participant_id: u64, value: u64) -> ShamirResult<Self> {
        if participant_id == 0 {
            return Err(ShamirError::InvalidParticipantId(participant_id));
        }

        Ok(Share {
            participant_id,
            value,
        })
    }
}

impl PointSource<PrimeField> for Share {
    fn x(&self, field: &PrimeField) -> Residue {
        field.element_u64(self.participant_id)
    }

    fn y(&self, field: &PrimeField) -> Residue {
        field.element_u64(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_creation() {
        let share = Share::new(3, 42).unwrap();
        assert_eq!(share.participant_id, 3);
        assert_eq!(share.value, 42);
    }

    #[test]
    fn test_invalid_participant_id() {
        assert_eq!(
            Share::new(0, 42),
            Err(ShamirError::InvalidParticipantId(0))
        );
    }

    #[test]
    fn test_share_is_a_field_point() {
        let field = PrimeField::new(17).unwrap();
        let share = Share::new(20, 35).unwrap();
        assert_eq!(share.x(&field), 3);
        assert_eq!(share.y(&field), 1);
    }

    #[test]
    fn test_share_serde() {
        let share = Share::new(2, 99).unwrap();
        let json = serde_json::to_string(&share).unwrap();
        assert_eq!(json, r#"{"participant_id":2,"value":99}"#);
        let back: Share = serde_json::from_str(&json).unwrap();
        assert_eq!(back, share);
    }
}
