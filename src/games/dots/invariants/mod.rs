//! First-class invariants for dots and boxes.
//!
//! Invariants are logical properties that must hold after every committed
//! move. The session checks them in debug builds; each one is also tested
//! on its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

type Check<S> = (fn(&S) -> bool, fn() -> &'static str);

fn collect<S>(checks: &[Check<S>], state: &S) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation::new(description()))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(
            &[
                (I1::holds, I1::description),
                (I2::holds, I2::description),
            ],
            state,
        )
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(
            &[
                (I1::holds, I1::description),
                (I2::holds, I2::description),
                (I3::holds, I3::description),
                (I4::holds, I4::description),
            ],
            state,
        )
    }
}

pub mod dots_drawn;
pub mod enclosed_boxes;
pub mod score_ledger;
pub mod shadow_clear;

pub use dots_drawn::DotsDrawnInvariant;
pub use enclosed_boxes::EnclosedBoxesInvariant;
pub use score_ledger::ScoreLedgerInvariant;
pub use shadow_clear::ShadowClearInvariant;

/// Every dots and boxes invariant as a composable set.
pub type BoxesAndDotsInvariants = (
    DotsDrawnInvariant,
    EnclosedBoxesInvariant,
    ScoreLedgerInvariant,
    ShadowClearInvariant,
);
