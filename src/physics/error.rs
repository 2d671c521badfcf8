use std::fmt;

/// Which piece of a body's dynamic state a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateQuantity {
    Position,
    Velocity,
    Force,
}

impl fmt::Display for StateQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StateQuantity::Position => "position",
            StateQuantity::Velocity => "velocity",
            StateQuantity::Force => "force",
        })
    }
}

/// Why a body was rejected when building a simulation.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum InvalidBodyReason {
    #[error("mass must be positive and finite, got {0}")]
    NonPositiveMass(f64),

    #[error("name is already used by another body")]
    DuplicateName,

    #[error("initial {0} is not finite")]
    NonFiniteState(StateQuantity),
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SimulationError {
    #[error("invalid body '{name}': {reason}")]
    InvalidBody {
        name: String,
        reason: InvalidBodyReason,
    },

    #[error("cannot integrate body '{name}' with mass {mass}")]
    InvalidState { name: String, mass: f64 },

    #[error("invalid time step: {0} (must be positive and finite)")]
    InvalidTimeStep(f64),

    #[error("invalid gravitational constant: {0} (must be finite)")]
    InvalidGravitationalConstant(f64),

    #[error("non-finite {quantity} on body '{name}' during step {step}")]
    NumericInstability {
        name: String,
        quantity: StateQuantity,
        step: u64,
    },
}

impl SimulationError {
    pub(crate) fn invalid_body(name: &str, reason: InvalidBodyReason) -> Self {
        Self::InvalidBody {
            name: name.to_owned(),
            reason,
        }
    }
}
