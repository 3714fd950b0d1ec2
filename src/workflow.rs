//! Gating for the seller journey: become a car owner, create a listing, pay.
//!
//! The current step is derived from what the client already knows (session,
//! fetched owners, a listing created during this visit) and only moves when a
//! backend call succeeds.
use thiserror::Error;

use crate::models::CarOwner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SellerStep {
    SignIn,
    BecomeOwner,
    CreateListing,
    Pay { car_id: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SellerAction {
    BecomeOwner,
    CreateListing,
    Pay,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    #[error("Please sign in to sell a car.")]
    NotSignedIn,
    #[error("You are already a car owner.")]
    AlreadyOwner,
    #[error("Become a car owner before listing a car.")]
    NotOwner,
    #[error("Create a listing before paying for it.")]
    NoListing,
    #[error("Finish paying for your current listing first.")]
    PaymentPending,
}

/// The owner profile belonging to `user_id`, if any.
pub fn owner_for(user_id: i64, owners: &[CarOwner]) -> Option<&CarOwner> {
    owners.iter().find(|owner| owner.user == user_id)
}

pub fn seller_step(user_id: Option<i64>, owners: &[CarOwner], pending: Option<i64>) -> SellerStep {
    let Some(user_id) = user_id else {
        return SellerStep::SignIn;
    };
    if owner_for(user_id, owners).is_none() {
        return SellerStep::BecomeOwner;
    }
    match pending {
        Some(car_id) => SellerStep::Pay { car_id },
        None => SellerStep::CreateListing,
    }
}

impl SellerStep {
    /// Position in the journey, for the progress indicator.
    pub fn index(self) -> usize {
        match self {
            SellerStep::SignIn => 0,
            SellerStep::BecomeOwner => 1,
            SellerStep::CreateListing => 2,
            SellerStep::Pay { .. } => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SellerStep::SignIn => "Sign in",
            SellerStep::BecomeOwner => "Become an owner",
            SellerStep::CreateListing => "Create a listing",
            SellerStep::Pay { .. } => "Pay",
        }
    }

    pub fn all() -> [SellerStep; 4] {
        [
            SellerStep::SignIn,
            SellerStep::BecomeOwner,
            SellerStep::CreateListing,
            SellerStep::Pay { car_id: 0 },
        ]
    }

    /// Checks that `action` is allowed from this step.
    pub fn permits(self, action: SellerAction) -> Result<(), GateError> {
        match (self, action) {
            (SellerStep::SignIn, _) => Err(GateError::NotSignedIn),

            (SellerStep::BecomeOwner, SellerAction::BecomeOwner) => Ok(()),
            (_, SellerAction::BecomeOwner) => Err(GateError::AlreadyOwner),

            (SellerStep::BecomeOwner, _) => Err(GateError::NotOwner),

            (SellerStep::CreateListing, SellerAction::CreateListing) => Ok(()),
            (SellerStep::CreateListing, SellerAction::Pay) => Err(GateError::NoListing),

            (SellerStep::Pay { .. }, SellerAction::Pay) => Ok(()),
            (SellerStep::Pay { .. }, SellerAction::CreateListing) => Err(GateError::PaymentPending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(user: i64) -> CarOwner {
        CarOwner {
            id: user * 10,
            user,
            phone: "0712345678".into(),
            address: "1 Main St".into(),
        }
    }

    #[test]
    fn steps_follow_state() {
        let owners = vec![owner(1), owner(2)];
        assert_eq!(seller_step(None, &owners, None), SellerStep::SignIn);
        assert_eq!(seller_step(Some(3), &owners, None), SellerStep::BecomeOwner);
        assert_eq!(seller_step(Some(2), &owners, None), SellerStep::CreateListing);
        assert_eq!(
            seller_step(Some(2), &owners, Some(55)),
            SellerStep::Pay { car_id: 55 }
        );
    }

    #[test]
    fn pending_listing_needs_an_owner() {
        assert_eq!(seller_step(Some(9), &[], Some(5)), SellerStep::BecomeOwner);
    }

    #[test]
    fn gates() {
        assert_eq!(
            SellerStep::SignIn.permits(SellerAction::BecomeOwner),
            Err(GateError::NotSignedIn)
        );
        assert_eq!(
            SellerStep::BecomeOwner.permits(SellerAction::CreateListing),
            Err(GateError::NotOwner)
        );
        assert_eq!(
            SellerStep::CreateListing.permits(SellerAction::BecomeOwner),
            Err(GateError::AlreadyOwner)
        );
        assert_eq!(
            SellerStep::CreateListing.permits(SellerAction::Pay),
            Err(GateError::NoListing)
        );
        assert_eq!(
            SellerStep::Pay { car_id: 1 }.permits(SellerAction::CreateListing),
            Err(GateError::PaymentPending)
        );
        assert!(SellerStep::Pay { car_id: 1 }.permits(SellerAction::Pay).is_ok());
    }

    #[test]
    fn only_a_pending_listing_can_be_paid() {
        assert_eq!(
            SellerStep::SignIn.permits(SellerAction::Pay),
            Err(GateError::NotSignedIn)
        );
        assert_eq!(
            SellerStep::BecomeOwner.permits(SellerAction::Pay),
            Err(GateError::NotOwner)
        );
        assert_eq!(
            SellerStep::CreateListing.permits(SellerAction::Pay),
            Err(GateError::NoListing)
        );
        assert_eq!(
            crate::error::ApiError::from(GateError::NoListing).display_message(),
            "Create a listing before paying for it."
        );
        assert_eq!(SellerStep::Pay { car_id: 9 }.permits(SellerAction::Pay), Ok(()));
    }

    #[test]
    fn gate_messages_read_as_notifications() {
        let err = crate::error::ApiError::from(GateError::NotOwner);
        assert_eq!(err.display_message(), "Become a car owner before listing a car.");
    }

    #[test]
    fn progress_is_ordered() {
        let indices = SellerStep::all().map(SellerStep::index);
        assert_eq!(indices, [0, 1, 2, 3]);
    }
}
